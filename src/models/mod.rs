//! CPU scheduling domain models.
//!
//! Provides the input ([`Process`]) and output ([`Segment`], [`Timeline`])
//! types shared by every policy.
//!
//! # Terminology
//!
//! | Type | Meaning |
//! |------|---------|
//! | Process | Unit of CPU work with arrival, burst and priority |
//! | Segment | Interval `[start, end)` owned by one process or idle |
//! | Timeline | Contiguous segment list from 0 to the makespan |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Segment, Timeline, IDLE_PID};
