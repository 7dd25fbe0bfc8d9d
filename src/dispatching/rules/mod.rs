//! Built-in dispatching rules.
//!
//! All rules return lower scores for processes that should be selected
//! first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest burst first.
///
/// Minimizes average waiting time among non-preemptive policies.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Highest priority first, where a lower numeric value is more important.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.priority as f64
    }

    fn description(&self) -> &'static str {
        "Lowest priority value first"
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
