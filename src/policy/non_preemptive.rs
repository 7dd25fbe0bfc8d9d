//! Non-preemptive ready-list scheduling: SJF and Priority.
//!
//! # Algorithm
//!
//! 1. Move every pending process with `arrival <= time` into the ready
//!    list, in arrival order.
//! 2. If nothing is ready, emit one idle segment up to the next arrival
//!    and jump there.
//! 3. Otherwise select a process with the rule engine, remove it, and run
//!    its whole burst as one segment.
//!
//! Once selected a process runs to completion; arrivals during its burst
//! only become candidates at the next selection.
//!
//! # Complexity
//! O(n^2) rule evaluations in the worst case (n = processes).

use tracing::trace;

use super::arrival_order;
use crate::dispatching::RuleEngine;
use crate::models::{Process, Segment};

/// Shortest-job-first, non-preemptive.
///
/// Ties on burst go to the earlier arrival, then to input order.
pub fn sjf(processes: &[Process]) -> Vec<Segment> {
    non_preemptive(processes, &RuleEngine::shortest_job_first())
}

/// Priority scheduling, non-preemptive. Lower value = higher priority.
///
/// Ties on priority go to the earlier arrival, then the shorter burst,
/// then input order.
pub fn priority(processes: &[Process]) -> Vec<Segment> {
    non_preemptive(processes, &RuleEngine::priority())
}

/// Runs the ready-list loop with an arbitrary selection engine.
///
/// # Panics
/// If a process has a negative arrival or a non-positive burst.
pub fn non_preemptive(processes: &[Process], engine: &RuleEngine) -> Vec<Segment> {
    let pending = arrival_order(processes);
    let mut segments = Vec::with_capacity(pending.len());
    let mut ready: Vec<&Process> = Vec::new();
    let mut next = 0;
    let mut time = 0;

    while next < pending.len() || !ready.is_empty() {
        while next < pending.len() && pending[next].arrival <= time {
            ready.push(pending[next]);
            next += 1;
        }

        let Some(best) = engine.select_best(&ready) else {
            // Nothing ready: the loop guard guarantees a pending arrival.
            let arrival = pending[next].arrival;
            trace!(start = time, end = arrival, "idle");
            segments.push(Segment::idle(time, arrival));
            time = arrival;
            continue;
        };

        let p = ready.remove(best);
        trace!(pid = %p.id, start = time, end = time + p.burst, "dispatch");
        segments.push(Segment::new(&p.id, time, time + p.burst));
        time += p.burst;
    }

    segments
}
