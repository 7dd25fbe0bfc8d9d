//! First-come-first-served.
//!
//! Processes run to completion in arrival order. Equal arrivals keep
//! their input order.

use tracing::trace;

use super::arrival_order;
use crate::models::{Process, Segment};

/// Schedules processes first-come-first-served.
///
/// Idle gaps before a late arrival become explicit idle segments.
/// Returns an empty list for an empty process set.
///
/// # Panics
/// If a process has a negative arrival or a non-positive burst.
///
/// # Example
/// ```
/// use u_cpusched::models::{Process, Segment};
/// use u_cpusched::policy::fcfs;
///
/// let segments = fcfs(&[Process::new("P1", 2, 3)]);
/// assert_eq!(segments, vec![Segment::idle(0, 2), Segment::new("P1", 2, 5)]);
/// ```
pub fn fcfs(processes: &[Process]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(processes.len());
    let mut time = 0;

    for p in arrival_order(processes) {
        if time < p.arrival {
            trace!(start = time, end = p.arrival, "idle");
            segments.push(Segment::idle(time, p.arrival));
            time = p.arrival;
        }
        trace!(pid = %p.id, start = time, end = time + p.burst, "dispatch");
        segments.push(Segment::new(&p.id, time, time + p.burst));
        time += p.burst;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 6),
        ];
        assert_eq!(
            fcfs(&processes),
            vec![
                Segment::new("P1", 0, 4),
                Segment::new("P2", 4, 7),
                Segment::new("P3", 7, 13),
            ]
        );
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![Process::new("late", 5, 1), Process::new("early", 0, 2)];
        let segments = fcfs(&processes);
        assert_eq!(segments[0], Segment::new("early", 0, 2));
        assert_eq!(segments[1], Segment::idle(2, 5));
        assert_eq!(segments[2], Segment::new("late", 5, 6));
    }

    #[test]
    fn test_fcfs_equal_arrival_keeps_input_order() {
        let processes = vec![
            Process::new("B", 0, 5),
            Process::new("A", 0, 1),
            Process::new("C", 0, 2),
        ];
        let order: Vec<String> = fcfs(&processes).into_iter().map(|s| s.pid).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_fcfs_leading_idle() {
        let segments = fcfs(&[Process::new("P1", 3, 2)]);
        assert_eq!(segments, vec![Segment::idle(0, 3), Segment::new("P1", 3, 5)]);
    }

    #[test]
    fn test_fcfs_empty() {
        assert!(fcfs(&[]).is_empty());
    }

    #[test]
    fn test_fcfs_does_not_mutate_input() {
        let processes = vec![Process::new("P2", 4, 1), Process::new("P1", 0, 2)];
        let before = processes.clone();
        let _ = fcfs(&processes);
        assert_eq!(processes, before);
    }

    #[test]
    #[should_panic(expected = "non-positive burst")]
    fn test_fcfs_rejects_zero_burst() {
        fcfs(&[Process::new("P1", 0, 0)]);
    }
}
