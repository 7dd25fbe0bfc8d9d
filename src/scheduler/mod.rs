//! Run derivation and orchestration.
//!
//! Turns a policy's segment list into the values a front end consumes:
//! a per-unit tick sequence, aggregate metrics and an extended KPI
//! report. [`Simulator`] wires policy selection and derivation together.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod metrics;
mod simulator;
mod ticks;

pub use kpi::{ProcessStats, ScheduleKpi};
pub use metrics::{compute_metrics, round2, Metrics};
pub use simulator::{simulate, SimulationRun, Simulator};
pub use ticks::expand_to_ticks;
