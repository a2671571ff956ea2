//! Batch validation configuration.

use serde::{Deserialize, Serialize};

/// Batch validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Batches smaller than this are validated sequentially.
    #[serde(default = "default_min_parallel_orders")]
    pub min_parallel_orders: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            min_parallel_orders: default_min_parallel_orders(),
        }
    }
}

const fn default_min_parallel_orders() -> usize {
    4
}
