//! Binary assignment over the gate variables.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::matrix::{GateVariable, NUM_VARIABLES};

/// Binary vector of length [`NUM_VARIABLES`]; every component is 0 or 1.
///
/// `Copy` so that proposing a neighbour never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct AnnealingState {
    bits: [u8; NUM_VARIABLES],
}

impl AnnealingState {
    /// All-zero assignment.
    #[must_use]
    pub const fn zeros() -> Self {
        Self {
            bits: [0; NUM_VARIABLES],
        }
    }

    /// Build from booleans.
    #[must_use]
    pub const fn from_bools(values: [bool; NUM_VARIABLES]) -> Self {
        Self {
            bits: [
                values[0] as u8,
                values[1] as u8,
                values[2] as u8,
                values[3] as u8,
            ],
        }
    }

    /// Uniformly random assignment drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::zeros();
        for bit in &mut state.bits {
            *bit = u8::from(rng.random::<bool>());
        }
        state
    }

    /// Flip the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_VARIABLES`.
    #[inline]
    pub const fn flip(&mut self, index: usize) {
        self.bits[index] ^= 1;
    }

    /// Component at `index` as 0 or 1.
    #[inline]
    #[must_use]
    pub const fn bit(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// Whether a variable is set.
    #[must_use]
    pub const fn is_set(&self, variable: GateVariable) -> bool {
        self.bits[variable.index()] == 1
    }

    /// Raw components.
    #[must_use]
    pub const fn bits(&self) -> &[u8; NUM_VARIABLES] {
        &self.bits
    }

    /// Variables set in this assignment, in index order.
    #[must_use]
    pub fn selected(&self) -> Vec<GateVariable> {
        GateVariable::ALL
            .into_iter()
            .filter(|variable| self.is_set(*variable))
            .collect()
    }
}

impl TryFrom<Vec<u8>> for AnnealingState {
    type Error = String;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        let bits: [u8; NUM_VARIABLES] = values.try_into().map_err(|v: Vec<u8>| {
            format!("expected {NUM_VARIABLES} components, got {}", v.len())
        })?;
        if bits.iter().any(|bit| *bit > 1) {
            return Err(format!("components must be 0 or 1, got {bits:?}"));
        }
        Ok(Self { bits })
    }
}

impl From<AnnealingState> for Vec<u8> {
    fn from(state: AnnealingState) -> Self {
        state.bits.to_vec()
    }
}
