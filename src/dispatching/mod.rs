//! Dispatching rules and rule engine for ready-list selection.
//!
//! Non-preemptive policies pick the next process from a ready list.
//! Selection is an explicit chain of rules, each consulted only when the
//! previous ones tie.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let a = Process::new("A", 0, 5);
//! let b = Process::new("B", 1, 2);
//! assert_eq!(engine.select_best(&[&a, &b]), Some(1));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = selected first.
pub type RuleScore = f64;

/// A dispatching rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a process. Lower = selected first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
