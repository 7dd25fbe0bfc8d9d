//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::policy::Policy;

/// Parameters for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Policy to run.
    pub policy: Policy,
    /// Round-robin time slice. Values below 1 are clamped to 1 at run time.
    pub quantum: i64,
    /// Validate the process set before scheduling.
    pub validate: bool,
}

impl SimulationConfig {
    /// FCFS, quantum 2, validation on.
    pub fn new() -> Self {
        Self {
            policy: Policy::Fcfs,
            quantum: 2,
            validate: true,
        }
    }

    /// Set the policy
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the round-robin quantum
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Enable/disable input validation
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Quantum clamped to at least 1.
    pub fn effective_quantum(&self) -> i64 {
        self.quantum.max(1)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
