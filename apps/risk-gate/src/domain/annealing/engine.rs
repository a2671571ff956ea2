//! Parallel simulated annealing engine.
//!
//! Each run is an independent Markov chain with its own ChaCha8 generator,
//! state buffer and cooling schedule. Runs execute on the rayon pool and
//! write into their own result slot; a single-threaded pass afterwards picks
//! the minimum-energy slot, breaking ties by lowest run index.
//!
//! # Reproducibility
//!
//! With `seed = Some(s)`, run `k` is seeded with `s + k` (wrapping), so a
//! search is fully reproducible and a search with more runs always contains
//! the runs of a search with fewer.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::params::AnnealingParams;
use super::schedule::{GeometricCooling, acceptance_probability};
use crate::domain::qubo::{AnnealingState, NUM_VARIABLES, QuboMatrix, energy};
use crate::error::RiskGateError;

/// How often a run polls its deadline, in iterations.
const DEADLINE_CHECK_INTERVAL: u32 = 64;

/// A state together with its energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolutionResult {
    /// Assignment.
    pub state: AnnealingState,
    /// Energy of `state`.
    pub energy: f64,
}

impl SolutionResult {
    /// Placeholder used when no run produced a result.
    #[must_use]
    pub const fn unsolved() -> Self {
        Self {
            state: AnnealingState::zeros(),
            energy: f64::INFINITY,
        }
    }
}

/// Result slot of one annealing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Index of the run within its search.
    pub run_index: usize,
    /// Seed of the run's generator.
    pub seed: u64,
    /// Best solution this run visited.
    pub best: SolutionResult,
    /// Iterations actually executed.
    pub iterations_completed: u32,
    /// Temperature after the last executed iteration.
    pub final_temperature: f64,
    /// Whether the run stopped at the deadline.
    pub truncated: bool,
}

/// Parallel simulated annealing solver.
#[derive(Debug, Clone)]
pub struct AnnealingEngine {
    params: AnnealingParams,
}

impl AnnealingEngine {
    /// Create an engine, failing fast on invalid tunables.
    pub fn new(params: AnnealingParams) -> Result<Self, RiskGateError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Best solution across all runs.
    #[must_use]
    pub fn search(&self, qubo: &QuboMatrix) -> SolutionResult {
        reduce_runs(&self.run_all(qubo)).map_or_else(SolutionResult::unsolved, |run| run.best)
    }

    /// Execute every run and return the per-run slots in run-index order.
    #[must_use]
    pub fn run_all(&self, qubo: &QuboMatrix) -> Vec<RunOutcome> {
        let base_seed = self
            .params
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());
        self.run_all_seeded(qubo, base_seed)
    }

    /// Execute every run from an explicit base seed.
    #[must_use]
    pub fn run_all_seeded(&self, qubo: &QuboMatrix, base_seed: u64) -> Vec<RunOutcome> {
        let deadline = self.params.time_budget().map(|budget| Instant::now() + budget);

        let runs: Vec<RunOutcome> = (0..self.params.num_parallel_runs)
            .into_par_iter()
            .map(|run_index| {
                let seed = base_seed.wrapping_add(run_index as u64);
                anneal(qubo, &self.params, run_index, seed, deadline)
            })
            .collect();

        let truncated = runs.iter().filter(|run| run.truncated).count();
        if truncated > 0 {
            debug!(
                truncated,
                runs = runs.len(),
                budget_us = ?self.params.time_budget_us,
                "Annealing search hit its time budget"
            );
        }

        runs
    }
}

/// Minimum-energy run; ties go to the lowest run index.
#[must_use]
pub fn reduce_runs(runs: &[RunOutcome]) -> Option<&RunOutcome> {
    let mut best: Option<&RunOutcome> = None;
    for run in runs {
        let better = match best {
            None => true,
            Some(current) => {
                run.best.energy < current.best.energy
                    || (run.best.energy == current.best.energy
                        && run.run_index < current.run_index)
            }
        };
        if better {
            best = Some(run);
        }
    }
    best
}

/// One Metropolis chain.
fn anneal(
    qubo: &QuboMatrix,
    params: &AnnealingParams,
    run_index: usize,
    seed: u64,
    deadline: Option<Instant>,
) -> RunOutcome {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut schedule = GeometricCooling::new(params.initial_temperature, params.cooling_rate);

    let mut state = AnnealingState::random(&mut rng);
    let mut current_energy = energy(&state, qubo);
    let mut best = SolutionResult {
        state,
        energy: current_energy,
    };

    let mut iterations_completed = 0;
    let mut truncated = false;

    for iteration in 0..params.num_iterations {
        if let Some(deadline) = deadline {
            if iteration % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                truncated = true;
                break;
            }
        }

        let mut candidate = state;
        candidate.flip(rng.random_range(0..NUM_VARIABLES));
        let candidate_energy = energy(&candidate, qubo);

        let accept = candidate_energy < current_energy
            || rng.random::<f64>()
                < acceptance_probability(current_energy, candidate_energy, schedule.temperature());

        if accept {
            state = candidate;
            current_energy = candidate_energy;
            if current_energy < best.energy {
                best = SolutionResult {
                    state,
                    energy: current_energy,
                };
            }
        }

        schedule.advance();
        iterations_completed += 1;
    }

    trace!(
        run_index,
        seed,
        energy = best.energy,
        iterations_completed,
        truncated,
        "Annealing run complete"
    );

    RunOutcome {
        run_index,
        seed,
        best,
        iterations_completed,
        final_temperature: schedule.temperature(),
        truncated,
    }
}
