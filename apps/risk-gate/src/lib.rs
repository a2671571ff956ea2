// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::items_after_statements
    )
)]

//! Risk Gate - Rust Core Library
//!
//! Pre-trade order gate for high-frequency trading. Each order is scored by
//! encoding it as a four-variable QUBO model and minimizing that model with
//! parallel simulated annealing. Orders whose best energy falls strictly
//! below the risk threshold are approved.
//!
//! # Architecture
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core logic with no I/O
//!   - `qubo`: Matrix, binary state, energy function, model builder
//!   - `annealing`: Parameters, cooling schedule, parallel annealing engine
//!   - `risk_gate`: Order, risk metrics, validator and decision
//!
//! - **Application**: Batch orchestration
//!   - `use_cases`: `BatchValidate`
//!   - `dto`: Request and response shapes for the JSON boundary
//!
//! - **Config**: YAML configuration with environment interpolation
//!
//! # Example
//!
//! ```rust,ignore
//! use risk_gate::{MarketSnapshot, Order, RiskMetrics, RiskValidator};
//!
//! let validator = RiskValidator::with_defaults()?;
//! let decision = validator.validate(
//!     &Order::new(10.0, 2.0),
//!     &MarketSnapshot::empty(),
//!     &RiskMetrics::new(0.1, 0.2, 0.3, 0.5),
//! )?;
//! assert!(decision.approved);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - QUBO model, annealing engine and risk gate.
pub mod domain;

/// Application layer - Batch use case and DTOs.
pub mod application;

/// Configuration loading.
pub mod config;

/// Error taxonomy.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

pub use application::dto::{BatchValidationRequestDto, BatchValidationResponseDto};
pub use application::use_cases::BatchValidateUseCase;
pub use domain::annealing::{AnnealingEngine, AnnealingParams, RunOutcome, SolutionResult};
pub use domain::qubo::{AnnealingState, GateVariable, QuboMatrix, QuboModelBuilder, energy};
pub use domain::risk_gate::{MarketSnapshot, Order, RiskMetrics, RiskValidator, ValidationDecision};
pub use error::{ErrorCode, RiskGateError};
