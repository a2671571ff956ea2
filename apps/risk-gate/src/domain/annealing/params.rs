//! Annealing tunables.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RiskGateError;

/// Parameters of a parallel annealing search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealingParams {
    /// Iterations per run.
    #[serde(default = "default_num_iterations")]
    pub num_iterations: u32,
    /// Starting temperature of every run.
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,
    /// Geometric cooling factor, strictly between 0 and 1.
    #[serde(default = "default_cooling_rate")]
    pub cooling_rate: f64,
    /// Independent runs per search.
    #[serde(default = "default_num_parallel_runs")]
    pub num_parallel_runs: usize,
    /// Base seed; run `k` is seeded with `seed + k`. `None` draws fresh entropy per search.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Wall-clock budget per search in microseconds. `None` is unbounded.
    #[serde(default)]
    pub time_budget_us: Option<u64>,
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self {
            num_iterations: default_num_iterations(),
            initial_temperature: default_initial_temperature(),
            cooling_rate: default_cooling_rate(),
            num_parallel_runs: default_num_parallel_runs(),
            seed: None,
            time_budget_us: None,
        }
    }
}

const fn default_num_iterations() -> u32 {
    1000
}

const fn default_initial_temperature() -> f64 {
    100.0
}

const fn default_cooling_rate() -> f64 {
    0.99
}

fn default_num_parallel_runs() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

impl AnnealingParams {
    /// Set the base seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of runs.
    #[must_use]
    pub const fn with_parallel_runs(mut self, runs: usize) -> Self {
        self.num_parallel_runs = runs;
        self
    }

    /// Set the iterations per run.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.num_iterations = iterations;
        self
    }

    /// Set the wall-clock budget.
    #[must_use]
    pub const fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_us = Some(budget.as_micros() as u64);
        self
    }

    /// Wall-clock budget, if any.
    #[must_use]
    pub const fn time_budget(&self) -> Option<Duration> {
        match self.time_budget_us {
            Some(us) => Some(Duration::from_micros(us)),
            None => None,
        }
    }

    /// Reject tunables that make the search undefined.
    pub fn validate(&self) -> Result<(), RiskGateError> {
        let cooling_in_range = self.cooling_rate > 0.0 && self.cooling_rate < 1.0;
        if !cooling_in_range {
            return Err(RiskGateError::configuration(
                "cooling_rate",
                format!("cooling_rate must be in (0, 1), got {}", self.cooling_rate),
            ));
        }

        if self.num_parallel_runs < 1 {
            return Err(RiskGateError::configuration(
                "num_parallel_runs",
                "num_parallel_runs must be at least 1",
            ));
        }

        if !self.initial_temperature.is_finite() || self.initial_temperature < 0.0 {
            return Err(RiskGateError::configuration(
                "initial_temperature",
                format!(
                    "initial_temperature must be finite and non-negative, got {}",
                    self.initial_temperature
                ),
            ));
        }

        Ok(())
    }
}
