//! Gate decision configuration.

use serde::{Deserialize, Serialize};

use crate::domain::risk_gate::services::DEFAULT_RISK_THRESHOLD;

/// Gate decision configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Orders are approved only when the best energy is strictly below this value.
    #[serde(default = "default_risk_threshold")]
    pub risk_threshold: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            risk_threshold: default_risk_threshold(),
        }
    }
}

const fn default_risk_threshold() -> f64 {
    DEFAULT_RISK_THRESHOLD
}
