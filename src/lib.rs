//! Uniprocessor CPU scheduling simulator.
//!
//! Simulates classical scheduling policies over a fixed set of processes
//! and produces a deterministic execution timeline plus derived metrics.
//! Every run is a pure recomputation from the process set and parameters.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `Timeline`, `IDLE_PID`
//! - **`policy`**: FCFS, SJF, priority and round-robin engines, `Policy` selector
//! - **`dispatching`**: Rule chains used to pick from a ready list
//! - **`scheduler`**: Tick expansion, metrics, KPIs and the `Simulator`
//! - **`validation`**: Input integrity checks (IDs, arrivals, bursts)
//! - **`generator`**: Seeded synthetic workloads
//! - **`config`**: `SimulationConfig`
//!
//! # Data Flow
//!
//! ```text
//! Process set → Policy → Segments → { Tick sequence, Metrics, KPIs }
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
