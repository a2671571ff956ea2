//! Risk Validator
//!
//! Builds the QUBO for an order, solves it, and approves the order only
//! when the best energy is strictly below the risk threshold.

use std::time::Instant;

use tracing::{Level, debug, span};

use crate::domain::annealing::{AnnealingEngine, AnnealingParams, reduce_runs};
use crate::domain::qubo::QuboModelBuilder;
use crate::domain::risk_gate::value_objects::{
    MarketSnapshot, Order, RiskMetrics, ValidationDecision,
};
use crate::error::RiskGateError;

/// Default risk threshold.
pub const DEFAULT_RISK_THRESHOLD: f64 = -1.0;

/// Risk Validator - gates one order at a time.
///
/// Holds no state across calls; every validation builds a fresh model and
/// runs a fresh search.
#[derive(Debug, Clone)]
pub struct RiskValidator {
    risk_threshold: f64,
    builder: QuboModelBuilder,
    engine: AnnealingEngine,
}

impl RiskValidator {
    /// Create a validator, failing fast on invalid tunables.
    pub fn new(risk_threshold: f64, params: AnnealingParams) -> Result<Self, RiskGateError> {
        if !risk_threshold.is_finite() {
            return Err(RiskGateError::configuration(
                "risk_threshold",
                format!("risk_threshold must be finite, got {risk_threshold}"),
            ));
        }

        Ok(Self {
            risk_threshold,
            builder: QuboModelBuilder::new(),
            engine: AnnealingEngine::new(params)?,
        })
    }

    /// Create with default threshold and annealing parameters.
    pub fn with_defaults() -> Result<Self, RiskGateError> {
        Self::new(DEFAULT_RISK_THRESHOLD, AnnealingParams::default())
    }

    /// Threshold rule: strictly below approves, equal rejects.
    #[must_use]
    pub fn is_approved(&self, energy: f64) -> bool {
        energy < self.risk_threshold
    }

    /// Validate one order.
    ///
    /// `_market` is reserved; the QUBO model does not read market data.
    pub fn validate(
        &self,
        order: &Order,
        _market: &MarketSnapshot,
        metrics: &RiskMetrics,
    ) -> Result<ValidationDecision, RiskGateError> {
        let _span = span!(Level::DEBUG, "risk_validation", order_id = %order.id).entered();

        order.ensure_finite()?;
        metrics.ensure_finite().map_err(|e| e.with_order(&order.id))?;

        let start = Instant::now();

        let qubo = self.builder.build(order, metrics);
        if !qubo.is_finite() {
            return Err(RiskGateError::computation(
                "QUBO coefficient overflowed to a non-finite value",
            )
            .with_order(&order.id));
        }
        if !qubo.magnitude_bound().is_finite() {
            return Err(RiskGateError::computation(
                "QUBO energy can overflow: coefficient magnitudes sum to a non-finite value",
            )
            .with_order(&order.id));
        }

        let runs = self.engine.run_all(&qubo);
        let Some(best) = reduce_runs(&runs) else {
            return Err(
                RiskGateError::computation("annealing produced no runs").with_order(&order.id)
            );
        };

        let latency_microseconds = start.elapsed().as_secs_f64() * 1e6;

        if !best.best.energy.is_finite() {
            return Err(RiskGateError::computation(format!(
                "energy evaluation overflowed: {}",
                best.best.energy
            ))
            .with_order(&order.id));
        }

        let approved = self.is_approved(best.best.energy);

        debug!(
            order_id = %order.id,
            energy = best.best.energy,
            approved,
            best_run = best.run_index,
            latency_us = latency_microseconds,
            "Risk validation complete"
        );

        Ok(ValidationDecision {
            order_id: order.id.clone(),
            approved,
            energy: best.best.energy,
            latency_microseconds,
            state: best.best.state,
        })
    }
}
