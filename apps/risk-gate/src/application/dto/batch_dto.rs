//! Batch validation DTOs

use serde::{Deserialize, Serialize};

use crate::domain::risk_gate::value_objects::{
    MarketSnapshot, Order, RiskMetrics, ValidationDecision,
};
use crate::error::RiskGateError;

/// One order in a batch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequestDto {
    /// Order fields.
    #[serde(flatten)]
    pub order: Order,
    /// Per-order risk metrics, overriding the request-level snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_metrics: Option<RiskMetrics>,
}

impl From<Order> for OrderRequestDto {
    fn from(order: Order) -> Self {
        Self {
            order,
            risk_metrics: None,
        }
    }
}

/// Batch validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValidationRequestDto {
    /// Market data, passed through to the validator.
    #[serde(default)]
    pub market_data: MarketSnapshot,
    /// Risk metrics shared by every order without its own.
    #[serde(default)]
    pub risk_metrics: Option<RiskMetrics>,
    /// Orders, validated and reported in this order.
    pub orders: Vec<OrderRequestDto>,
}

/// Outcome of one batch slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    /// Energy strictly below the threshold.
    Approved,
    /// Energy at or above the threshold.
    Rejected,
    /// Validation failed for this order.
    Failed,
}

/// Result for one batch slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResultDto {
    /// Position of the order in the request.
    pub index: usize,
    /// Order identifier.
    pub order_id: String,
    /// Slot outcome.
    pub status: SlotStatus,
    /// Decision, when validation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<ValidationDecision>,
    /// Failure, when validation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RiskGateError>,
}

impl SlotResultDto {
    /// Build from a slot result.
    #[must_use]
    pub fn from_result(
        index: usize,
        order_id: &str,
        result: Result<ValidationDecision, RiskGateError>,
    ) -> Self {
        match result {
            Ok(decision) => Self {
                index,
                order_id: order_id.to_string(),
                status: if decision.approved {
                    SlotStatus::Approved
                } else {
                    SlotStatus::Rejected
                },
                decision: Some(decision),
                error: None,
            },
            Err(error) => Self {
                index,
                order_id: order_id.to_string(),
                status: SlotStatus::Failed,
                decision: None,
                error: Some(error),
            },
        }
    }
}

/// Batch validation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValidationResponseDto {
    /// One entry per request order, in request order.
    pub results: Vec<SlotResultDto>,
    /// Approved count.
    pub approved: usize,
    /// Rejected count.
    pub rejected: usize,
    /// Failed count.
    pub failed: usize,
}

impl BatchValidationResponseDto {
    /// Build from slot results, computing the counts.
    #[must_use]
    pub fn new(results: Vec<SlotResultDto>) -> Self {
        let count = |status: SlotStatus| results.iter().filter(|r| r.status == status).count();
        let approved = count(SlotStatus::Approved);
        let rejected = count(SlotStatus::Rejected);
        let failed = count(SlotStatus::Failed);
        Self {
            results,
            approved,
            rejected,
            failed,
        }
    }
}
