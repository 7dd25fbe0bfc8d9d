//! Run performance indicators (KPIs).
//!
//! Extends the aggregate [`Metrics`](super::Metrics) with per-process
//! statistics and CPU-level figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last segment |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | completed processes / makespan |
//! | Response | first dispatch - arrival |
//! | Context Switches | dispatches handing the CPU to a different process |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::metrics::{finish_time, round2};
use crate::models::{Process, Timeline};

/// Timing statistics for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process ID.
    pub id: String,
    /// Arrival time.
    pub arrival: i64,
    /// Burst.
    pub burst: i64,
    /// Priority.
    pub priority: i32,
    /// First dispatch time. `None` if the process never ran.
    pub first_start: Option<i64>,
    /// Completion time (0 if the process never ran).
    pub finish: i64,
    /// finish - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// first_start - arrival.
    pub response: Option<i64>,
}

/// Run performance indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Per-process statistics, in input order.
    pub processes: Vec<ProcessStats>,
    /// End of the last segment.
    pub makespan: i64,
    /// Time owned by some process.
    pub busy_time: i64,
    /// Time covered by idle segments.
    pub idle_time: i64,
    /// busy_time / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Number of context switches.
    pub context_switches: usize,
    /// Mean waiting time, rounded to 2 decimals.
    pub average_waiting: f64,
    /// Mean turnaround time, rounded to 2 decimals.
    pub average_turnaround: f64,
    /// Mean response time over processes that ran, rounded to 2 decimals.
    pub average_response: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from the input processes and the resulting timeline.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let stats: Vec<ProcessStats> = processes
            .iter()
            .map(|p| {
                let finish = finish_time(&timeline.segments, &p.id);
                let first_start = timeline.first_start(&p.id);
                let turnaround = finish - p.arrival;
                ProcessStats {
                    id: p.id.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    priority: p.priority,
                    first_start,
                    finish,
                    turnaround,
                    waiting: turnaround - p.burst,
                    response: first_start.map(|s| s - p.arrival),
                }
            })
            .collect();

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        let divisor = stats.len().max(1) as f64;
        let total_waiting: i64 = stats.iter().map(|s| s.waiting).sum();
        let total_turnaround: i64 = stats.iter().map(|s| s.turnaround).sum();

        let responses: Vec<i64> = stats.iter().filter_map(|s| s.response).collect();
        let average_response = if responses.is_empty() {
            0.0
        } else {
            round2(responses.iter().sum::<i64>() as f64 / responses.len() as f64)
        };

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                stats.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            processes: stats,
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
            average_waiting: round2(total_waiting as f64 / divisor),
            average_turnaround: round2(total_turnaround as f64 / divisor),
            average_response,
        }
    }

    /// Statistics for one process.
    pub fn stats_for(&self, id: &str) -> Option<&ProcessStats> {
        self.processes.iter().find(|s| s.id == id)
    }
}
