//! Scheduling policy engines.
//!
//! Each policy is a pure function from a process set (plus the quantum
//! for round robin) to a segment list. Policies never mutate their input
//! and keep no state between calls.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | arrival, then input order |
//! | SJF | no | burst, arrival, input order |
//! | Priority | no | priority value, arrival, burst, input order |
//! | Round robin | yes | FIFO queue, `quantum` per turn |
//!
//! # Output Invariants
//!
//! - Segments partition `[0, makespan)`: `segments[i].end == segments[i + 1].start`.
//! - Idle time is an explicit idle segment, never a gap.
//! - No segment for a process starts before its arrival.
//! - The durations of a process's segments sum to its burst.

mod fcfs;
mod non_preemptive;
mod round_robin;

pub use fcfs::fcfs;
pub use non_preemptive::{non_preemptive, priority, sjf};
pub use round_robin::round_robin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Process, Segment};

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-come-first-served.
    #[default]
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Priority, non-preemptive (lower value first).
    Priority,
    /// Round robin with a fixed quantum.
    RoundRobin,
}

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    /// Canonical short name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Priority => "priority",
            Policy::RoundRobin => "rr",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Runs the policy. `quantum` is only consulted by round robin and
    /// must be at least 1.
    pub fn schedule(&self, processes: &[Process], quantum: i64) -> Vec<Segment> {
        match self {
            Policy::Fcfs => fcfs(processes),
            Policy::Sjf => sjf(processes),
            Policy::Priority => priority(processes),
            Policy::RoundRobin => round_robin(processes, quantum),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "priority" | "prio" => Ok(Policy::Priority),
            "rr" | "round-robin" | "round_robin" | "roundrobin" => Ok(Policy::RoundRobin),
            _ => Err(SimulationError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Arrival-sorted view of the input. Equal arrivals keep input order.
///
/// # Panics
/// On a negative arrival or a non-positive burst.
fn arrival_order(processes: &[Process]) -> Vec<&Process> {
    for p in processes {
        assert!(p.arrival >= 0, "process '{}' has negative arrival {}", p.id, p.arrival);
        assert!(p.burst >= 1, "process '{}' has non-positive burst {}", p.id, p.burst);
    }
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival);
    order
}
