//! Round robin (preemptive).
//!
//! # Algorithm
//!
//! A FIFO ready queue hands each process at most `quantum` units per turn.
//! After every slice:
//!
//! 1. processes that arrived in `(previous time, new time]` are enqueued,
//! 2. **then** the preempted process is requeued if it has work left.
//!
//! New arrivals therefore go ahead of the incumbent when an arrival
//! coincides with a quantum boundary.
//!
//! Slices are never merged: a process running two consecutive quanta
//! yields two adjacent segments with the same pid.

use std::collections::VecDeque;

use tracing::trace;

use super::arrival_order;
use crate::models::{Process, Segment};

/// Schedules processes round robin with the given quantum.
///
/// # Panics
/// If `quantum < 1`, or a process has a negative arrival or a
/// non-positive burst. Callers clamp the quantum before calling.
///
/// # Example
/// ```
/// use u_cpusched::models::{Process, Segment};
/// use u_cpusched::policy::round_robin;
///
/// let segments = round_robin(&[Process::new("P1", 0, 3)], 2);
/// assert_eq!(segments, vec![Segment::new("P1", 0, 2), Segment::new("P1", 2, 3)]);
/// ```
pub fn round_robin(processes: &[Process], quantum: i64) -> Vec<Segment> {
    assert!(quantum >= 1, "round robin quantum must be at least 1, got {quantum}");

    let pending = arrival_order(processes);
    // Remaining work is tracked per position so duplicate ids cannot alias.
    let mut remaining: Vec<i64> = pending.iter().map(|p| p.burst).collect();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(pending.len());
    let mut segments = Vec::new();
    let mut next = 0;
    let mut time = 0;

    admit(&pending, &mut next, &mut queue, time);

    loop {
        let Some(idx) = queue.pop_front() else {
            let Some(p) = pending.get(next) else {
                break;
            };
            trace!(start = time, end = p.arrival, "idle");
            segments.push(Segment::idle(time, p.arrival));
            time = p.arrival;
            admit(&pending, &mut next, &mut queue, time);
            continue;
        };

        let p = pending[idx];
        let slice = quantum.min(remaining[idx]);
        trace!(pid = %p.id, start = time, end = time + slice, "dispatch");
        segments.push(Segment::new(&p.id, time, time + slice));
        time += slice;
        remaining[idx] -= slice;

        admit(&pending, &mut next, &mut queue, time);
        if remaining[idx] > 0 {
            queue.push_back(idx);
        }
    }

    segments
}

/// Enqueues every pending process that has arrived by `time`.
fn admit(pending: &[&Process], next: &mut usize, queue: &mut VecDeque<usize>, time: i64) {
    while *next < pending.len() && pending[*next].arrival <= time {
        queue.push_back(*next);
        *next += 1;
    }
}
