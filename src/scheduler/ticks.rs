//! Tick expansion.
//!
//! Converts a segment list into one entry per time unit, the form a
//! playback cursor steps through.

use crate::models::Segment;

/// Expands segments into a per-unit ownership sequence.
///
/// The result has length `segments.last().end` (0 when empty); entry `t`
/// is the pid of the segment with `start <= t < end`. Each tick is
/// resolved by a direct scan over the segments.
///
/// # Example
/// ```
/// use u_cpusched::models::Segment;
/// use u_cpusched::scheduler::expand_to_ticks;
///
/// let ticks = expand_to_ticks(&[Segment::new("P1", 0, 2), Segment::idle(2, 3)]);
/// assert_eq!(ticks, vec!["P1", "P1", "IDLE"]);
/// ```
pub fn expand_to_ticks(segments: &[Segment]) -> Vec<String> {
    let makespan = segments.last().map(|s| s.end).unwrap_or(0);
    (0..makespan)
        .filter_map(|t| segments.iter().find(|s| s.contains(t)))
        .map(|s| s.pid.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IDLE_PID;

    #[test]
    fn test_expand_basic() {
        let segments = vec![Segment::new("P1", 0, 2), Segment::new("P2", 2, 5)];
        assert_eq!(expand_to_ticks(&segments), vec!["P1", "P1", "P2", "P2", "P2"]);
    }

    #[test]
    fn test_expand_with_idle() {
        let segments = vec![Segment::idle(0, 1), Segment::new("P1", 1, 2)];
        assert_eq!(expand_to_ticks(&segments), vec![IDLE_PID, "P1"]);
    }

    #[test]
    fn test_expand_repeated_pid() {
        let segments = vec![Segment::new("P1", 0, 1), Segment::new("P1", 1, 2)];
        assert_eq!(expand_to_ticks(&segments), vec!["P1", "P1"]);
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand_to_ticks(&[]).is_empty());
    }

    #[test]
    fn test_expand_length_is_makespan() {
        let segments = vec![
            Segment::new("A", 0, 3),
            Segment::idle(3, 10),
            Segment::new("B", 10, 11),
        ];
        let ticks = expand_to_ticks(&segments);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[9], IDLE_PID);
        assert_eq!(ticks[10], "B");
    }
}
