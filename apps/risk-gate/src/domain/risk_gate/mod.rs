//! Risk Gate Bounded Context
//!
//! Turns an optimized QUBO energy into an approve/reject decision per order.
//!
//! # Key Concepts
//!
//! - **Order**: Size and expected profit of a proposed trade
//! - **Risk Metrics**: Volatility, liquidity, correlation and margin snapshot
//! - **Risk Threshold**: Orders are approved only when the best energy is strictly below it

pub mod services;
pub mod value_objects;

pub use services::RiskValidator;
pub use value_objects::{MarketSnapshot, Order, RiskMetrics, ValidationDecision};
