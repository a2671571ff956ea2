//! Error taxonomy for the risk gate.
//!
//! Every failure carries a stable [`ErrorCode`], a human-readable message,
//! and enough context (order id, offending field) for the caller to log or
//! alert without the gate performing any logging itself.
//!
//! | Code | Scope | Usage |
//! |------|-------|-------|
//! | `CONFIGURATION_ERROR` | Call-wide | Invalid annealing or gate tunables |
//! | `INVALID_INPUT` | Per order | Non-finite order or risk metric values |
//! | `COMPUTATION_ERROR` | Per order | Energy or coefficient overflow |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for the risk gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid tunables; the validator is unusable.
    ConfigurationError,
    /// Non-finite values in an order or its risk metrics.
    InvalidInput,
    /// Arithmetic overflow while building or scoring the model.
    ComputationError,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ConfigurationError => "CONFIGURATION_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ComputationError => "COMPUTATION_ERROR",
        }
    }

    /// Whether the failure invalidates the whole call rather than one order.
    #[must_use]
    pub const fn is_call_wide(&self) -> bool {
        matches!(self, Self::ConfigurationError)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A risk gate failure with context.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{}] {}", .code.reason(), .message)]
pub struct RiskGateError {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl RiskGateError {
    /// Create a new error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            order_id: None,
            field: None,
        }
    }

    /// Invalid tunable.
    #[must_use]
    pub fn configuration(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigurationError, message).with_field(field)
    }

    /// Non-finite input value.
    #[must_use]
    pub fn invalid_input(field: &str, value: f64) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("{field} must be a finite number, got {value}"),
        )
        .with_field(field)
    }

    /// Overflow while building or solving the model.
    #[must_use]
    pub fn computation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ComputationError, message)
    }

    /// Attach the order this failure belongs to.
    #[must_use]
    pub fn with_order(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Attach the offending field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Order the failure belongs to, if any.
    #[must_use]
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Offending field, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}
