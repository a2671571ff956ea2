//! Risk metric snapshot for one validation call.

use serde::{Deserialize, Serialize};

use super::ensure_finite;
use crate::error::RiskGateError;

/// Risk metrics consumed by the QUBO builder.
///
/// `margin_requirement` is expected in `[0, 1]` but is not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Price volatility.
    pub volatility: f64,
    /// Market liquidity.
    pub liquidity: f64,
    /// Correlation with the existing book.
    pub correlation: f64,
    /// Margin requirement ratio.
    pub margin_requirement: f64,
}

impl RiskMetrics {
    /// Create a snapshot.
    #[must_use]
    pub const fn new(
        volatility: f64,
        liquidity: f64,
        correlation: f64,
        margin_requirement: f64,
    ) -> Self {
        Self {
            volatility,
            liquidity,
            correlation,
            margin_requirement,
        }
    }

    /// Reject NaN and infinite fields.
    pub fn ensure_finite(&self) -> Result<(), RiskGateError> {
        ensure_finite("volatility", self.volatility)?;
        ensure_finite("liquidity", self.liquidity)?;
        ensure_finite("correlation", self.correlation)?;
        ensure_finite("margin_requirement", self.margin_requirement)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(RiskMetrics::new(f64::NAN, 0.2, 0.3, 0.5), "volatility" ; "nan volatility")]
    #[test_case(RiskMetrics::new(0.1, f64::INFINITY, 0.3, 0.5), "liquidity" ; "infinite liquidity")]
    #[test_case(RiskMetrics::new(0.1, 0.2, f64::NEG_INFINITY, 0.5), "correlation" ; "negative infinite correlation")]
    #[test_case(RiskMetrics::new(0.1, 0.2, 0.3, f64::NAN), "margin_requirement" ; "nan margin")]
    fn non_finite_field_is_named(metrics: RiskMetrics, field: &str) {
        let err = metrics.ensure_finite().unwrap_err();
        assert_eq!(err.field(), Some(field));
    }

    #[test]
    fn out_of_range_margin_is_accepted() {
        assert!(RiskMetrics::new(0.1, 0.2, 0.3, 1.7).ensure_finite().is_ok());
    }
}
