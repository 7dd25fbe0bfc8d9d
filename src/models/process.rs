//! Process model.
//!
//! A process is an immutable unit of CPU work: it becomes ready at its
//! arrival time and needs `burst` units of CPU before it completes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer simulation units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes ready.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    ///
    /// Only consulted by the priority policy.
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest time the process could finish if it ran uninterrupted.
    #[inline]
    pub fn earliest_finish(&self) -> i64 {
        self.arrival + self.burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 5).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 5);
        assert_eq!(p.priority, 2);
        assert_eq!(p.earliest_finish(), 8);
    }

    #[test]
    fn test_process_default_priority() {
        assert_eq!(Process::new("P1", 0, 1).priority, 0);
    }
}
