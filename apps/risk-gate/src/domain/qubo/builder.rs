//! Maps an order and its risk metrics into the gate QUBO.

use super::matrix::{GateVariable, QuboMatrix};
use crate::domain::risk_gate::value_objects::{Order, RiskMetrics};

/// Reward for executing, per unit of expected profit.
const PROFIT_WEIGHT: f64 = -2.3;
/// Resize risk, per unit of size times volatility.
const SIZE_RISK_WEIGHT: f64 = 1.8;
/// Delay risk, per unit of liquidity.
const DELAY_RISK_WEIGHT: f64 = 0.5;
/// Partial-fill risk, per unit of free margin.
const PARTIAL_FILL_RISK_WEIGHT: f64 = 1.2;
/// Execute/resize coupling, per unit of volatility.
const EXECUTE_RESIZE_WEIGHT: f64 = 0.5;
/// Execute/delay coupling, per unit of liquidity.
const EXECUTE_DELAY_WEIGHT: f64 = 0.3;
/// Execute/partial-fill coupling, per unit of correlation.
const EXECUTE_PARTIAL_FILL_WEIGHT: f64 = 0.2;

/// Stateless QUBO builder.
///
/// Pure: no validation, no clamping, no randomness. Callers reject
/// non-finite inputs before building.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuboModelBuilder;

impl QuboModelBuilder {
    /// Create a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the QUBO matrix for one order.
    #[must_use]
    pub fn build(&self, order: &Order, metrics: &RiskMetrics) -> QuboMatrix {
        use GateVariable::{Delay, Execute, PartialFill, Resize};

        let mut qubo = QuboMatrix::zeros();

        qubo.set_linear(Execute, PROFIT_WEIGHT * order.expected_profit);
        qubo.set_linear(Resize, SIZE_RISK_WEIGHT * order.size * metrics.volatility);
        qubo.set_linear(Delay, DELAY_RISK_WEIGHT * metrics.liquidity);
        qubo.set_linear(
            PartialFill,
            PARTIAL_FILL_RISK_WEIGHT * (1.0 - metrics.margin_requirement),
        );

        qubo.set_interaction(Execute, Resize, EXECUTE_RESIZE_WEIGHT * metrics.volatility);
        qubo.set_interaction(Execute, Delay, EXECUTE_DELAY_WEIGHT * metrics.liquidity);
        qubo.set_interaction(
            Execute,
            PartialFill,
            EXECUTE_PARTIAL_FILL_WEIGHT * metrics.correlation,
        );

        qubo
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::qubo::NUM_VARIABLES;

    fn reference_inputs() -> (Order, RiskMetrics) {
        (
            Order::with_id("ord-1", 10.0, 2.0),
            RiskMetrics::new(0.1, 0.2, 0.3, 0.5),
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn linear_coefficients() {
        let (order, metrics) = reference_inputs();
        let qubo = QuboModelBuilder::new().build(&order, &metrics);

        assert!(approx(qubo.get(0, 0), -4.6));
        assert!(approx(qubo.get(1, 1), 1.8));
        assert!(approx(qubo.get(2, 2), 0.1));
        assert!(approx(qubo.get(3, 3), 0.6));
    }

    #[test]
    fn interaction_coefficients() {
        let (order, metrics) = reference_inputs();
        let qubo = QuboModelBuilder::new().build(&order, &metrics);

        assert!(approx(qubo.get(0, 1), 0.05));
        assert!(approx(qubo.get(0, 2), 0.06));
        assert!(approx(qubo.get(0, 3), 0.06));
    }

    #[test]
    fn remaining_entries_are_zero() {
        let (order, metrics) = reference_inputs();
        let qubo = QuboModelBuilder::new().build(&order, &metrics);

        let populated = [(0, 0), (1, 1), (2, 2), (3, 3), (0, 1), (0, 2), (0, 3)];
        for i in 0..NUM_VARIABLES {
            for j in 0..NUM_VARIABLES {
                if !populated.contains(&(i, j)) {
                    assert_eq!(qubo.get(i, j), 0.0, "entry ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn margin_outside_unit_interval_is_not_clamped() {
        let order = Order::with_id("ord-1", 1.0, 1.0);
        let metrics = RiskMetrics::new(0.0, 0.0, 0.0, 1.5);
        let qubo = QuboModelBuilder::new().build(&order, &metrics);

        assert!(approx(qubo.get(3, 3), 1.2 * (1.0 - 1.5)));
    }

    proptest! {
        #[test]
        fn build_is_pure(
            size in -1.0e3..1.0e3f64,
            profit in -1.0e3..1.0e3f64,
            vol in 0.0..5.0f64,
            liq in 0.0..5.0f64,
            corr in -1.0..1.0f64,
            margin in 0.0..1.0f64,
        ) {
            let order = Order::with_id("p", size, profit);
            let metrics = RiskMetrics::new(vol, liq, corr, margin);
            let builder = QuboModelBuilder::new();

            let first = builder.build(&order, &metrics);
            prop_assert_eq!(first, builder.build(&order, &metrics));
            prop_assert!(first.is_finite());
            prop_assert_eq!(first.get(1, 0), 0.0);
        }
    }
}
