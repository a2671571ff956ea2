//! QUBO Model Bounded Context
//!
//! Encodes the order-gating trade-off as a Quadratic Unconstrained Binary
//! Optimization model over four decision variables.
//!
//! # Key Concepts
//!
//! - **Gate Variable**: One binary decision (execute, resize, delay, partial fill)
//! - **QUBO Matrix**: Linear terms on the diagonal, pairwise terms above it
//! - **Energy**: Objective value of an assignment; lower is better

pub mod builder;
pub mod energy;
pub mod matrix;
pub mod state;

pub use builder::QuboModelBuilder;
pub use energy::energy;
pub use matrix::{GateVariable, NUM_VARIABLES, QuboMatrix};
pub use state::AnnealingState;
