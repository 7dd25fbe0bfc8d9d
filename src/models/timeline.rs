//! Timeline (solution) model.
//!
//! A timeline is the ordered list of execution segments produced by a
//! scheduling policy. Segments partition `[0, makespan)` without gaps:
//! CPU inactivity is always an explicit idle segment.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};

/// Reserved pseudo-process id marking CPU inactivity.
///
/// Never a valid process id; the validator rejects it.
pub const IDLE_PID: &str = "IDLE";

/// A contiguous interval of CPU ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Owning process id, or [`IDLE_PID`].
    pub pid: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Segment {
    /// Creates a segment owned by a process.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self::new(IDLE_PID, start, end)
    }

    /// Whether this segment represents CPU inactivity.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid == IDLE_PID
    }

    /// Length of the segment (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether time unit `t` falls within `[start, end)`.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        self.start <= t && t < self.end
    }
}

/// An owned segment list with query helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in non-decreasing start order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Wraps a segment list.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Makespan: end of the last segment (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Returns all segments owned by a process.
    pub fn segments_for(&self, pid: &str) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }

    /// Completion time for a process (latest end of its non-idle segments).
    pub fn completion_time(&self, pid: &str) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| !s.is_idle() && s.pid == pid)
            .map(|s| s.end)
            .max()
    }

    /// First time a process is dispatched.
    pub fn first_start(&self, pid: &str) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| !s.is_idle() && s.pid == pid)
            .map(|s| s.start)
            .min()
    }

    /// Total time the CPU is owned by some process.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Total time covered by idle segments.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Number of dispatches that hand the CPU to a different process.
    ///
    /// Idle segments are skipped: `P1, IDLE, P1` counts as zero switches.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut last: Option<&str> = None;
        for seg in self.segments.iter().filter(|s| !s.is_idle()) {
            if let Some(prev) = last {
                if prev != seg.pid {
                    switches += 1;
                }
            }
            last = Some(&seg.pid);
        }
        switches
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Segment>> for Timeline {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}
