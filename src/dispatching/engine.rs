//! Rule engine for multi-criteria ready-list selection.
//!
//! Composes dispatching rules into a lexicographic chain with a final
//! tie-breaking strategy.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep the order candidates were presented in (stable).
    #[default]
    InsertionOrder,
    /// Deterministic by process ID (lexicographic).
    ById,
}

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence; a later rule is consulted only when
/// every earlier rule scores two candidates equally.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every candidate ties, so selection falls through to
    /// the final tie-breaker.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InsertionOrder,
            epsilon: 1e-9,
        }
    }

    /// Shortest burst, then earliest arrival, then insertion order.
    pub fn shortest_job_first() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Lowest priority value, then earliest arrival, then shortest burst,
    /// then insertion order.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival)
            .with_tie_breaker(rules::ShortestBurst)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by priority (selected first at index 0).
    ///
    /// Returns indices into `candidates`. The sort is stable, so with
    /// [`TieBreaker::InsertionOrder`] full ties keep their input order.
    pub fn sort_indices(&self, candidates: &[&Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(candidates[a], candidates[b]));
        indices
    }

    /// Returns the index of the candidate to run next.
    pub fn select_best(&self, candidates: &[&Process]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            match best {
                Some(b) if self.compare(candidate, candidates[b]) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Scores a single process with each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match &self.tie_breaker {
            TieBreaker::InsertionOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(candidates: &[&Process], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| candidates[i].id.clone()).collect()
    }

    #[test]
    fn test_sjf_ordering() {
        let long = Process::new("long", 0, 5);
        let short = Process::new("short", 0, 1);
        let medium = Process::new("medium", 0, 3);
        let candidates = [&long, &short, &medium];

        let order = RuleEngine::shortest_job_first().sort_indices(&candidates);
        assert_eq!(ids(&candidates, &order), vec!["short", "medium", "long"]);
    }

    #[test]
    fn test_sjf_tie_uses_arrival() {
        let late = Process::new("late", 3, 2);
        let early = Process::new("early", 1, 2);
        let candidates = [&late, &early];

        assert_eq!(RuleEngine::shortest_job_first().select_best(&candidates), Some(1));
    }

    #[test]
    fn test_full_tie_keeps_insertion_order() {
        let a = Process::new("B", 0, 2);
        let b = Process::new("A", 0, 2);
        let candidates = [&a, &b];

        let engine = RuleEngine::shortest_job_first();
        assert_eq!(engine.select_best(&candidates), Some(0));
        assert_eq!(engine.sort_indices(&candidates), vec![0, 1]);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let a = Process::new("B", 0, 2);
        let b = Process::new("A", 0, 2);
        let candidates = [&a, &b];

        let engine = RuleEngine::shortest_job_first().with_final_tie_breaker(TieBreaker::ById);
        assert_eq!(engine.select_best(&candidates), Some(1));
    }

    #[test]
    fn test_priority_chain() {
        // Same priority: earlier arrival wins, then shorter burst
        let p1 = Process::new("P1", 2, 5).with_priority(1);
        let p2 = Process::new("P2", 1, 9).with_priority(1);
        let p3 = Process::new("P3", 1, 3).with_priority(1);
        let p4 = Process::new("P4", 0, 1).with_priority(4);
        let candidates = [&p1, &p2, &p3, &p4];

        let order = RuleEngine::priority().sort_indices(&candidates);
        assert_eq!(ids(&candidates, &order), vec!["P3", "P2", "P1", "P4"]);
    }

    #[test]
    fn test_empty_candidates() {
        let engine = RuleEngine::shortest_job_first();
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.select_best(&[]).is_none());
    }

    #[test]
    fn test_no_rules_selects_first() {
        let a = Process::new("A", 5, 9);
        let b = Process::new("B", 0, 1);
        assert_eq!(RuleEngine::new().select_best(&[&a, &b]), Some(0));
    }

    #[test]
    fn test_evaluate_scores() {
        let p = Process::new("P", 4, 7).with_priority(2);
        let scores = RuleEngine::priority().evaluate(&p);
        assert_eq!(scores.len(), 3);
        assert!((scores[0] - 2.0).abs() < 1e-10); // priority
        assert!((scores[1] - 4.0).abs() < 1e-10); // arrival
        assert!((scores[2] - 7.0).abs() < 1e-10); // burst
    }

    #[test]
    fn test_debug_lists_rules() {
        let dbg = format!("{:?}", RuleEngine::shortest_job_first());
        assert!(dbg.contains("SJF"));
        assert!(dbg.contains("FIFO"));
    }
}
