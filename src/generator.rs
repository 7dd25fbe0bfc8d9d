//! Synthetic workload generation.
//!
//! Produces reproducible random process sets for demonstrations and
//! tests. The same seed always yields the same set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Random process set generator.
///
/// Arrivals are drawn uniformly from `[0, max_arrival]`, bursts from
/// `[min_burst, max_burst]` and priorities from
/// `[min_priority, max_priority]`. IDs are `P1`, `P2`, ... in generation
/// order.
///
/// # Example
/// ```
/// use u_cpusched::generator::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new().with_count(3).with_seed(7).generate();
/// assert_eq!(processes.len(), 3);
/// assert_eq!(processes[0].id, "P1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival.
    pub max_arrival: i64,
    /// Smallest burst (clamped to at least 1).
    pub min_burst: i64,
    /// Largest burst.
    pub max_burst: i64,
    /// Smallest priority value.
    pub min_priority: i32,
    /// Largest priority value.
    pub max_priority: i32,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadGenerator {
    /// Five processes arriving within 10 units, bursts 1..=8, priorities 1..=5.
    pub fn new() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 8,
            min_priority: 1,
            max_priority: 5,
            seed: 0,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set.
    ///
    /// Inverted or out-of-domain ranges are normalized so the output
    /// always passes validation.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let min_priority = self.min_priority.min(self.max_priority);
        let max_priority = self.max_priority.max(self.min_priority);

        (1..=self.count)
            .map(|n| {
                Process::new(
                    format!("P{n}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
                .with_priority(rng.random_range(min_priority..=max_priority))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
