//! Annealing Quality Tests
//!
//! Statistical checks on the parallel search and the approval boundary.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use risk_gate::domain::annealing::reduce_runs;
use risk_gate::{
    AnnealingEngine, AnnealingParams, AnnealingState, MarketSnapshot, Order, QuboMatrix,
    QuboModelBuilder, RiskMetrics, RiskValidator, energy,
};

/// Model with a deep optimum at 1010 and a shallow trap at 0101.
fn rugged_qubo() -> QuboMatrix {
    QuboMatrix::from_rows([
        [-2.0, 3.0, -2.5, 3.0],
        [0.0, -1.5, 3.0, -1.0],
        [0.0, 0.0, -2.0, 3.0],
        [0.0, 0.0, 0.0, -1.5],
    ])
}

fn brute_force_minimum(qubo: &QuboMatrix) -> f64 {
    (0..16u8)
        .map(|mask| {
            let bits = [0, 1, 2, 3].map(|i| mask & (1 << i) != 0);
            energy(&AnnealingState::from_bools(bits), qubo)
        })
        .fold(f64::INFINITY, f64::min)
}

fn short_search(runs: usize, seed: u64) -> f64 {
    let params = AnnealingParams {
        num_iterations: 6,
        initial_temperature: 0.5,
        ..AnnealingParams::default()
    }
    .with_parallel_runs(runs)
    .with_seed(seed);

    AnnealingEngine::new(params).unwrap().search(&rugged_qubo()).energy
}

#[test]
fn more_runs_improve_the_mean_result() {
    // Disjoint seed ranges: the single-run chains never appear in the 8-run searches.
    let trials = 200u64;
    let mean = |total: f64| total / trials as f64;

    let single: f64 = (0..trials).map(|t| short_search(1, 1_000_000 + t)).sum();
    let parallel: f64 = (0..trials).map(|t| short_search(8, t * 8)).sum();

    assert!(
        mean(parallel) <= mean(single),
        "8 runs averaged {}, 1 run averaged {}",
        mean(parallel),
        mean(single)
    );
}

#[test]
fn default_search_reaches_global_minimum() {
    let qubo = rugged_qubo();
    let optimum = brute_force_minimum(&qubo);

    let engine =
        AnnealingEngine::new(AnnealingParams::default().with_parallel_runs(8).with_seed(9))
            .unwrap();
    let result = engine.search(&qubo);

    assert_eq!(result.energy, optimum);
    assert_eq!(energy(&result.state, &qubo), result.energy);
}

#[test]
fn reduction_picks_the_best_run() {
    let engine = AnnealingEngine::new(
        AnnealingParams::default()
            .with_parallel_runs(6)
            .with_iterations(4),
    )
    .unwrap();
    let runs = engine.run_all_seeded(&rugged_qubo(), 123);

    let best = reduce_runs(&runs).unwrap();
    for run in &runs {
        assert!(best.best.energy <= run.best.energy);
        if run.best.energy == best.best.energy {
            assert!(best.run_index <= run.run_index);
        }
    }
}

#[test]
fn builder_model_matches_brute_force() {
    let order = Order::new(10.0, 2.0);
    let metrics = RiskMetrics::new(0.1, 0.2, 0.3, 0.5);
    let qubo = QuboModelBuilder::new().build(&order, &metrics);

    let engine = AnnealingEngine::new(AnnealingParams::default().with_seed(5)).unwrap();
    assert_eq!(engine.search(&qubo).energy, brute_force_minimum(&qubo));
}

#[test]
fn energy_equal_to_threshold_is_rejected() {
    // size 0 and margin 1 leave only the profit term: E* = -2.3 * profit.
    let order = Order::with_id("edge", 0.0, 2.0);
    let metrics = RiskMetrics::new(0.0, 0.0, 0.0, 1.0);
    let params = AnnealingParams::default().with_parallel_runs(2).with_seed(11);
    let minimum = -2.3 * 2.0;

    let at = RiskValidator::new(minimum, params.clone())
        .unwrap()
        .validate(&order, &MarketSnapshot::empty(), &metrics)
        .unwrap();
    assert_eq!(at.energy, minimum);
    assert!(!at.approved);

    let above = RiskValidator::new(minimum + 1e-9, params)
        .unwrap()
        .validate(&order, &MarketSnapshot::empty(), &metrics)
        .unwrap();
    assert!(above.approved);
}
