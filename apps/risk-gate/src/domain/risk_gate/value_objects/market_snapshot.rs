//! Market data passed through the gate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque market data snapshot.
///
/// Accepted by the validator for interface symmetry with upstream decision
/// sources; the QUBO model does not read it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Arbitrary upstream fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl MarketSnapshot {
    /// Empty snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Field lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_arbitrary_fields() {
        let snapshot: MarketSnapshot =
            serde_json::from_str(r#"{"symbol": "AAPL", "mid": 187.25}"#).unwrap();
        assert_eq!(snapshot.get("symbol"), Some(&serde_json::json!("AAPL")));
        assert_eq!(snapshot.fields.len(), 2);
    }
}
