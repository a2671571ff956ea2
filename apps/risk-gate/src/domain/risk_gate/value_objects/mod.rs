//! Risk Gate Value Objects

mod decision;
mod market_snapshot;
mod order;
mod risk_metrics;

pub use decision::ValidationDecision;
pub use market_snapshot::MarketSnapshot;
pub use order::Order;
pub use risk_metrics::RiskMetrics;

use crate::error::RiskGateError;

/// Reject non-finite inputs before they reach the QUBO builder.
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<(), RiskGateError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RiskGateError::invalid_input(field, value))
    }
}
