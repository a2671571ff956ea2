//! QUBO energy evaluation.
//!
//! This is the annealing hot path: no allocation, no I/O.

use super::matrix::{NUM_VARIABLES, QuboMatrix};
use super::state::AnnealingState;

/// Energy of `state` under `qubo`.
///
/// `Σ_i Q[i,i]·x_i + Σ_{i<j} Q[i,j]·x_i·x_j`. Lower-triangle entries are
/// never read.
#[inline]
#[must_use]
pub fn energy(state: &AnnealingState, qubo: &QuboMatrix) -> f64 {
    let mut total = 0.0;
    for i in 0..NUM_VARIABLES {
        let xi = f64::from(state.bit(i));
        total += qubo.get(i, i) * xi;
        for j in (i + 1)..NUM_VARIABLES {
            total += qubo.get(i, j) * xi * f64::from(state.bit(j));
        }
    }
    total
}
