//! Batch Validate Use Case
//!
//! Applies the risk validator to every order of a batch. Output slots match
//! input order and length; one order's failure never aborts the others.
//! Only call-wide (configuration) failures abort the batch.

use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::application::dto::{BatchValidationRequestDto, BatchValidationResponseDto, SlotResultDto};
use crate::config::{BatchConfig, Config};
use crate::domain::risk_gate::services::RiskValidator;
use crate::domain::risk_gate::value_objects::{
    MarketSnapshot, Order, RiskMetrics, ValidationDecision,
};
use crate::error::{ErrorCode, RiskGateError};

/// Result of one batch slot.
pub type SlotOutcome = Result<ValidationDecision, RiskGateError>;

/// Use case for validating a batch of orders.
#[derive(Debug, Clone)]
pub struct BatchValidateUseCase {
    validator: RiskValidator,
    config: BatchConfig,
}

impl BatchValidateUseCase {
    /// Create a new BatchValidateUseCase.
    #[must_use]
    pub const fn new(validator: RiskValidator, config: BatchConfig) -> Self {
        Self { validator, config }
    }

    /// Wire the validator from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, RiskGateError> {
        let validator = RiskValidator::new(config.gate.risk_threshold, config.annealing.clone())?;
        Ok(Self::new(validator, config.batch.clone()))
    }

    /// Validate orders sharing one risk metrics snapshot.
    pub fn execute(
        &self,
        orders: &[Order],
        market: &MarketSnapshot,
        metrics: &RiskMetrics,
    ) -> Result<Vec<SlotOutcome>, RiskGateError> {
        let jobs = orders.iter().map(|order| (order, Some(metrics))).collect();
        self.run_slots(jobs, market)
    }

    /// Validate orders that each carry their own risk metrics.
    pub fn execute_each(
        &self,
        items: &[(Order, RiskMetrics)],
        market: &MarketSnapshot,
    ) -> Result<Vec<SlotOutcome>, RiskGateError> {
        let jobs = items
            .iter()
            .map(|(order, metrics)| (order, Some(metrics)))
            .collect();
        self.run_slots(jobs, market)
    }

    /// Validate a request DTO. Per-order metrics override the shared snapshot.
    pub fn execute_request(
        &self,
        request: &BatchValidationRequestDto,
    ) -> Result<BatchValidationResponseDto, RiskGateError> {
        let jobs = request
            .orders
            .iter()
            .map(|item| {
                (
                    &item.order,
                    item.risk_metrics.as_ref().or(request.risk_metrics.as_ref()),
                )
            })
            .collect();

        let outcomes = self.run_slots(jobs, &request.market_data)?;

        let results = request
            .orders
            .iter()
            .zip(outcomes)
            .enumerate()
            .map(|(index, (item, outcome))| {
                SlotResultDto::from_result(index, &item.order.id, outcome)
            })
            .collect();

        Ok(BatchValidationResponseDto::new(results))
    }

    fn run_slots(
        &self,
        jobs: Vec<(&Order, Option<&RiskMetrics>)>,
        market: &MarketSnapshot,
    ) -> Result<Vec<SlotOutcome>, RiskGateError> {
        let start = Instant::now();

        let validate = |(order, metrics): &(&Order, Option<&RiskMetrics>)| -> SlotOutcome {
            let metrics = metrics.ok_or_else(|| {
                RiskGateError::new(ErrorCode::InvalidInput, "no risk metrics supplied")
                    .with_field("risk_metrics")
                    .with_order(&order.id)
            })?;
            self.validator.validate(order, market, metrics)
        };

        let outcomes: Vec<SlotOutcome> = if jobs.len() >= self.config.min_parallel_orders {
            jobs.par_iter().map(validate).collect()
        } else {
            jobs.iter().map(validate).collect()
        };

        if let Some(error) = outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().err())
            .find(|error| error.code().is_call_wide())
        {
            return Err(error.clone());
        }

        let approved = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, Ok(decision) if decision.approved))
            .count();
        let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();

        info!(
            orders = outcomes.len(),
            approved,
            rejected = outcomes.len() - approved - failed,
            failed,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Batch validation complete"
        );

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annealing::AnnealingParams;
    use proptest::prelude::*;

    fn use_case(min_parallel_orders: usize) -> BatchValidateUseCase {
        let validator = RiskValidator::new(
            -1.0,
            AnnealingParams::default()
                .with_parallel_runs(2)
                .with_iterations(300)
                .with_seed(77),
        )
        .unwrap();
        BatchValidateUseCase::new(validator, BatchConfig { min_parallel_orders })
    }

    fn metrics() -> RiskMetrics {
        RiskMetrics::new(0.1, 0.2, 0.3, 0.5)
    }

    #[test]
    fn from_config_rejects_invalid_annealing() {
        let mut config = Config::default();
        config.annealing.num_parallel_runs = 0;
        let err = BatchValidateUseCase::from_config(&config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConfigurationError);
    }

    #[test]
    fn empty_batch_yields_empty_output() {
        let outcomes = use_case(4)
            .execute(&[], &MarketSnapshot::empty(), &metrics())
            .unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn sequential_and_parallel_paths_agree() {
        let orders: Vec<Order> = (0..6)
            .map(|i| Order::with_id(format!("ord-{i}"), 10.0, f64::from(i) - 2.0))
            .collect();

        let sequential = use_case(usize::MAX)
            .execute(&orders, &MarketSnapshot::empty(), &metrics())
            .unwrap();
        let parallel = use_case(1)
            .execute(&orders, &MarketSnapshot::empty(), &metrics())
            .unwrap();

        assert_eq!(sequential.len(), orders.len());
        for (a, b) in sequential.iter().zip(&parallel) {
            let (a, b) = (a.as_ref().unwrap(), b.as_ref().unwrap());
            assert_eq!(a.order_id, b.order_id);
            assert_eq!(a.energy, b.energy);
            assert_eq!(a.approved, b.approved);
        }
    }

    #[test]
    fn missing_metrics_fails_only_that_slot() {
        let request = BatchValidationRequestDto {
            market_data: MarketSnapshot::empty(),
            risk_metrics: None,
            orders: vec![
                crate::application::dto::OrderRequestDto {
                    order: Order::with_id("with", 10.0, 2.0),
                    risk_metrics: Some(metrics()),
                },
                Order::with_id("without", 10.0, 2.0).into(),
            ],
        };

        let response = use_case(4).execute_request(&request).unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.approved, 1);
        assert_eq!(response.failed, 1);
        let error = response.results[1].error.as_ref().unwrap();
        assert_eq!(error.field(), Some("risk_metrics"));
        assert_eq!(error.order_id(), Some("without"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn slots_follow_input_order(
            orders in prop::collection::vec((-50.0f64..50.0, -10.0f64..10.0), 0..12)
        ) {
            let orders: Vec<Order> = orders
                .into_iter()
                .enumerate()
                .map(|(i, (size, profit))| Order::with_id(format!("ord-{i}"), size, profit))
                .collect();

            let outcomes = use_case(3)
                .execute(&orders, &MarketSnapshot::empty(), &metrics())
                .unwrap();

            prop_assert_eq!(outcomes.len(), orders.len());
            for (order, outcome) in orders.iter().zip(&outcomes) {
                prop_assert_eq!(&outcome.as_ref().unwrap().order_id, &order.id);
            }
        }
    }
}
