//! Order under validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ensure_finite;
use crate::error::RiskGateError;

/// A proposed order as seen by the risk gate.
///
/// The identifier only correlates batch outputs to inputs; the model reads
/// `size` and `expected_profit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Correlation identifier.
    #[serde(default = "generate_order_id")]
    pub id: String,
    /// Order size. Expected non-negative; not enforced.
    pub size: f64,
    /// Expected profit of executing the order.
    pub expected_profit: f64,
}

fn generate_order_id() -> String {
    Uuid::new_v4().to_string()
}

impl Order {
    /// Create an order with a generated identifier.
    #[must_use]
    pub fn new(size: f64, expected_profit: f64) -> Self {
        Self::with_id(generate_order_id(), size, expected_profit)
    }

    /// Create an order with an explicit identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>, size: f64, expected_profit: f64) -> Self {
        Self {
            id: id.into(),
            size,
            expected_profit,
        }
    }

    /// Reject NaN and infinite fields.
    pub fn ensure_finite(&self) -> Result<(), RiskGateError> {
        ensure_finite("size", self.size)
            .and_then(|()| ensure_finite("expected_profit", self.expected_profit))
            .map_err(|e| e.with_order(&self.id))
    }
}
