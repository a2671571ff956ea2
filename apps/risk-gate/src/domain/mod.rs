//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`qubo`]: Gate decision variables, QUBO matrix, model builder, energy
//! - [`annealing`]: Parallel simulated annealing over the QUBO
//! - [`risk_gate`]: Order validation against the risk threshold

pub mod annealing;
pub mod qubo;
pub mod risk_gate;
