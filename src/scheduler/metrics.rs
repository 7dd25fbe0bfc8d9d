//! Aggregate waiting and turnaround metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Finish | End of the last non-idle segment bearing the process id |
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//!
//! Averages are rounded to two decimals, half away from zero.

use serde::{Deserialize, Serialize};

use crate::models::{Process, Segment};

/// Average waiting and turnaround time for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time, rounded to 2 decimals.
    pub average_waiting: f64,
    /// Mean turnaround time, rounded to 2 decimals.
    pub average_turnaround: f64,
}

/// Computes averages from the input processes and a run's segments.
///
/// A process with no segment contributes finish time 0. An empty set
/// yields zero averages.
///
/// # Example
/// ```
/// use u_cpusched::models::{Process, Segment};
/// use u_cpusched::scheduler::compute_metrics;
///
/// let processes = [Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
/// let segments = [Segment::new("P1", 0, 4), Segment::new("P2", 4, 7)];
/// let m = compute_metrics(&processes, &segments);
/// assert_eq!((m.average_waiting, m.average_turnaround), (1.5, 5.0));
/// ```
pub fn compute_metrics(processes: &[Process], segments: &[Segment]) -> Metrics {
    let mut total_waiting: i64 = 0;
    let mut total_turnaround: i64 = 0;

    for p in processes {
        let turnaround = finish_time(segments, &p.id) - p.arrival;
        total_turnaround += turnaround;
        total_waiting += turnaround - p.burst;
    }

    let divisor = processes.len().max(1) as f64;
    Metrics {
        average_waiting: round2(total_waiting as f64 / divisor),
        average_turnaround: round2(total_turnaround as f64 / divisor),
    }
}

/// End of the last non-idle segment owned by `pid`, or 0 if none.
pub(crate) fn finish_time(segments: &[Segment], pid: &str) -> i64 {
    segments
        .iter()
        .filter(|s| !s.is_idle() && s.pid == pid)
        .map(|s| s.end)
        .max()
        .unwrap_or(0)
}

/// Rounds to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
