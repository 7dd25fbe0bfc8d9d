//! Simulation errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulation orchestrator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The policy name is not recognized.
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
