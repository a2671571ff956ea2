//! Annealing Bounded Context
//!
//! Parallel simulated annealing over the gate QUBO.
//!
//! # Key Concepts
//!
//! - **Run**: One independent Markov chain with a private generator and state
//! - **Cooling Schedule**: Geometric decay of the temperature per iteration
//! - **Reduction**: Minimum energy across runs, ties broken by lowest run index

pub mod engine;
pub mod params;
pub mod schedule;

pub use engine::{AnnealingEngine, RunOutcome, SolutionResult, reduce_runs};
pub use params::AnnealingParams;
pub use schedule::{GeometricCooling, acceptance_probability};
