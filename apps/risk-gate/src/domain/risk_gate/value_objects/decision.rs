//! Approve/reject decision for one order.

use serde::{Deserialize, Serialize};

use crate::domain::qubo::{AnnealingState, GateVariable};

/// Terminal result of validating one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDecision {
    /// Order this decision belongs to.
    pub order_id: String,
    /// Whether the best energy was strictly below the risk threshold.
    pub approved: bool,
    /// Best energy found by the search.
    pub energy: f64,
    /// Wall-clock time spent building and solving the model.
    pub latency_microseconds: f64,
    /// Winning assignment.
    pub state: AnnealingState,
}

impl ValidationDecision {
    /// Gate actions selected by the winning assignment.
    #[must_use]
    pub fn actions(&self) -> Vec<GateVariable> {
        self.state.selected()
    }
}
