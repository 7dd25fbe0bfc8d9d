//! Simulation orchestrator.
//!
//! # Pipeline
//!
//! 1. Copy the process set (the caller may keep editing its own).
//! 2. Validate it, unless disabled in the config.
//! 3. Clamp the quantum to at least 1.
//! 4. Run the selected policy.
//! 5. Derive ticks, metrics and KPIs from the segments.
//!
//! Every run recomputes everything from scratch; nothing is cached
//! between runs.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{compute_metrics, expand_to_ticks, Metrics, ScheduleKpi};
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::models::{Process, Timeline};
use crate::policy::Policy;
use crate::validation::validate_processes;

/// The complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Policy that produced this run.
    pub policy: Policy,
    /// Quantum actually used (after clamping).
    pub quantum: i64,
    /// Snapshot of the process set taken at call time.
    pub processes: Vec<Process>,
    /// Segment list.
    pub timeline: Timeline,
    /// Per-unit ownership sequence.
    pub ticks: Vec<String>,
    /// Average waiting / turnaround.
    pub metrics: Metrics,
    /// Extended indicators.
    pub kpi: ScheduleKpi,
}

impl SimulationRun {
    /// End of the last segment.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }

    /// Owner of time unit `t`, if within the run.
    pub fn owner_at(&self, t: usize) -> Option<&str> {
        self.ticks.get(t).map(String::as_str)
    }
}

/// Stateless simulation driver.
///
/// # Example
///
/// ```
/// use u_cpusched::config::SimulationConfig;
/// use u_cpusched::models::Process;
/// use u_cpusched::policy::Policy;
/// use u_cpusched::scheduler::Simulator;
///
/// let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
/// let simulator = Simulator::new(SimulationConfig::new().with_policy(Policy::Sjf));
/// let run = simulator.run(&processes).unwrap();
/// assert_eq!(run.makespan(), 7);
/// assert_eq!(run.metrics.average_waiting, 1.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the configured policy over a snapshot of `processes`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInput`] when validation is enabled and
    /// the set is malformed.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationRun> {
        self.run_policy(self.config.policy, processes)
    }

    /// Runs every policy over the same snapshot, in [`Policy::ALL`] order.
    pub fn compare(&self, processes: &[Process]) -> Result<Vec<SimulationRun>> {
        Policy::ALL
            .iter()
            .map(|&policy| self.run_policy(policy, processes))
            .collect()
    }

    #[instrument(level = "debug", skip_all, fields(policy = %policy, processes = processes.len()))]
    fn run_policy(&self, policy: Policy, processes: &[Process]) -> Result<SimulationRun> {
        let snapshot = processes.to_vec();

        if self.config.validate {
            validate_processes(&snapshot).map_err(SimulationError::InvalidInput)?;
        }

        let quantum = self.config.effective_quantum();
        if quantum != self.config.quantum && policy == Policy::RoundRobin {
            warn!(requested = self.config.quantum, quantum, "quantum clamped");
        }

        let segments = policy.schedule(&snapshot, quantum);
        let ticks = expand_to_ticks(&segments);
        let metrics = compute_metrics(&snapshot, &segments);
        let timeline = Timeline::new(segments);
        let kpi = ScheduleKpi::calculate(&snapshot, &timeline);

        debug!(
            segments = timeline.segment_count(),
            makespan = timeline.makespan(),
            average_waiting = metrics.average_waiting,
            average_turnaround = metrics.average_turnaround,
            "simulation complete"
        );

        Ok(SimulationRun {
            policy,
            quantum,
            processes: snapshot,
            timeline,
            ticks,
            metrics,
            kpi,
        })
    }
}

/// Runs a policy selected by name.
///
/// Accepts the names understood by [`Policy::from_str`](std::str::FromStr).
///
/// # Errors
/// [`SimulationError::UnknownPolicy`] for an unrecognized name, or
/// [`SimulationError::InvalidInput`] for a malformed process set.
pub fn simulate(policy: &str, quantum: i64, processes: &[Process]) -> Result<SimulationRun> {
    let policy: Policy = policy.parse()?;
    Simulator::new(
        SimulationConfig::new()
            .with_policy(policy)
            .with_quantum(quantum),
    )
    .run(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Segment, IDLE_PID};
    use crate::validation::ValidationErrorKind;

    fn scenario() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 4).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 6).with_priority(3),
        ]
    }

    fn expected_serial() -> Vec<Segment> {
        vec![
            Segment::new("P1", 0, 4),
            Segment::new("P2", 4, 7),
            Segment::new("P3", 7, 13),
        ]
    }

    #[test]
    fn test_fcfs_sjf_priority_scenarios() {
        for name in ["fcfs", "sjf", "priority"] {
            let run = simulate(name, 2, &scenario()).unwrap();
            assert_eq!(run.timeline.segments, expected_serial(), "{name}");
        }
    }

    #[test]
    fn test_round_robin_run() {
        let run = simulate("rr", 2, &scenario()).unwrap();
        assert_eq!(run.policy, Policy::RoundRobin);
        assert_eq!(run.timeline.segment_count(), 7);
        assert_eq!(run.ticks.len(), 13);
        assert_eq!(run.owner_at(2), Some("P2"));
        assert_eq!(run.owner_at(13), None);
        assert_eq!(run.metrics.average_waiting, 4.67);
        assert_eq!(run.metrics.average_turnaround, 9.0);
    }

    #[test]
    fn test_quantum_clamped() {
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 0, 1)];
        let run = simulate("rr", 0, &processes).unwrap();
        assert_eq!(run.quantum, 1);
        assert_eq!(run.ticks, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_unknown_policy() {
        let err = simulate("lottery", 2, &scenario()).unwrap_err();
        assert_eq!(err, SimulationError::UnknownPolicy("lottery".into()));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P1", 1, 1)];
        let err = Simulator::default().run(&processes).unwrap_err();
        match err {
            SimulationError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validation_can_be_disabled() {
        // Duplicates are tolerated by the engine itself
        let processes = vec![Process::new("P1", 0, 1), Process::new("P1", 1, 1)];
        let simulator = Simulator::new(SimulationConfig::new().with_validation(false));
        let run = simulator.run(&processes).unwrap();
        assert_eq!(run.makespan(), 2);
    }

    #[test]
    fn test_empty_process_set() {
        for policy in Policy::ALL {
            let simulator = Simulator::new(SimulationConfig::new().with_policy(policy));
            let run = simulator.run(&[]).unwrap();
            assert!(run.timeline.is_empty());
            assert!(run.ticks.is_empty());
            assert_eq!(run.metrics, Metrics::default());
        }
    }

    #[test]
    fn test_idle_ticks() {
        let run = simulate("fcfs", 1, &[Process::new("P1", 2, 1)]).unwrap();
        assert_eq!(run.ticks, vec![IDLE_PID, IDLE_PID, "P1"]);
    }

    #[test]
    fn test_compare_all_policies() {
        let simulator = Simulator::new(SimulationConfig::new().with_quantum(2));
        let runs = simulator.compare(&scenario()).unwrap();
        let policies: Vec<Policy> = runs.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
        assert!(runs.iter().all(|r| r.makespan() == 13));
    }

    #[test]
    fn test_run_is_snapshot() {
        let mut processes = scenario();
        let run = Simulator::default().run(&processes).unwrap();
        processes.push(Process::new("P4", 0, 1));
        assert_eq!(run.processes.len(), 3);
    }

    #[test]
    fn test_rerun_identical() {
        let simulator = Simulator::new(SimulationConfig::new().with_policy(Policy::RoundRobin));
        let processes = scenario();
        assert_eq!(simulator.run(&processes), simulator.run(&processes));
    }

    #[test]
    fn test_run_serializes() {
        let run = simulate("sjf", 2, &scenario()).unwrap();
        let json = serde_json::to_string(&run).unwrap();
        let back: SimulationRun = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timeline, run.timeline);
        assert_eq!(back.policy, Policy::Sjf);
    }
}
