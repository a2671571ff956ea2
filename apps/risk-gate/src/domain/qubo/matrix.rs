//! Fixed-size QUBO coefficient matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of decision variables in the order-gating model.
pub const NUM_VARIABLES: usize = 4;

/// Decision variables of the order-gating model, in matrix index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateVariable {
    /// Execute the order as submitted.
    Execute,
    /// Resize the order.
    Resize,
    /// Delay execution.
    Delay,
    /// Fill only part of the order.
    PartialFill,
}

impl GateVariable {
    /// All variables, ordered by matrix index.
    pub const ALL: [Self; NUM_VARIABLES] =
        [Self::Execute, Self::Resize, Self::Delay, Self::PartialFill];

    /// Matrix index of this variable.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Execute => 0,
            Self::Resize => 1,
            Self::Delay => 2,
            Self::PartialFill => 3,
        }
    }

    /// Variable at a matrix index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Execute),
            1 => Some(Self::Resize),
            2 => Some(Self::Delay),
            3 => Some(Self::PartialFill),
            _ => None,
        }
    }

    /// Wire name of this variable.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Execute => "EXECUTE",
            Self::Resize => "RESIZE",
            Self::Delay => "DELAY",
            Self::PartialFill => "PARTIAL_FILL",
        }
    }
}

impl fmt::Display for GateVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Square QUBO matrix over the four gate variables.
///
/// Diagonal entries are linear coefficients and strict-upper-triangle
/// entries are pairwise coefficients. The lower triangle is never read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuboMatrix {
    coefficients: [[f64; NUM_VARIABLES]; NUM_VARIABLES],
}

impl QuboMatrix {
    /// All-zero matrix.
    #[must_use]
    pub const fn zeros() -> Self {
        Self {
            coefficients: [[0.0; NUM_VARIABLES]; NUM_VARIABLES],
        }
    }

    /// Build from raw rows.
    #[must_use]
    pub const fn from_rows(coefficients: [[f64; NUM_VARIABLES]; NUM_VARIABLES]) -> Self {
        Self { coefficients }
    }

    /// Diagonal-only matrix.
    #[must_use]
    pub const fn diagonal(values: [f64; NUM_VARIABLES]) -> Self {
        let mut matrix = Self::zeros();
        matrix.coefficients[0][0] = values[0];
        matrix.coefficients[1][1] = values[1];
        matrix.coefficients[2][2] = values[2];
        matrix.coefficients[3][3] = values[3];
        matrix
    }

    /// Coefficient at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= NUM_VARIABLES`.
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f64 {
        self.coefficients[row][col]
    }

    /// Set the coefficient at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= NUM_VARIABLES`.
    pub const fn set(&mut self, row: usize, col: usize, value: f64) {
        self.coefficients[row][col] = value;
    }

    /// Linear coefficient of a variable.
    #[must_use]
    pub const fn linear(&self, variable: GateVariable) -> f64 {
        let i = variable.index();
        self.coefficients[i][i]
    }

    /// Set the linear coefficient of a variable.
    pub const fn set_linear(&mut self, variable: GateVariable, value: f64) {
        let i = variable.index();
        self.coefficients[i][i] = value;
    }

    /// Pairwise coefficient between two distinct variables, read from the
    /// upper triangle regardless of argument order.
    #[must_use]
    pub const fn interaction(&self, a: GateVariable, b: GateVariable) -> f64 {
        let (i, j) = ordered(a.index(), b.index());
        self.coefficients[i][j]
    }

    /// Set the pairwise coefficient between two variables in the upper triangle.
    pub const fn set_interaction(&mut self, a: GateVariable, b: GateVariable, value: f64) {
        let (i, j) = ordered(a.index(), b.index());
        self.coefficients[i][j] = value;
    }

    /// Sum of absolute coefficients read by the energy function.
    ///
    /// Bounds `|energy(x)|` for every assignment, so a finite bound means no
    /// assignment's energy can overflow.
    #[must_use]
    pub fn magnitude_bound(&self) -> f64 {
        (0..NUM_VARIABLES)
            .flat_map(|i| (i..NUM_VARIABLES).map(move |j| (i, j)))
            .map(|(i, j)| self.coefficients[i][j].abs())
            .sum()
    }

    /// Whether every coefficient read by the energy function is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        (0..NUM_VARIABLES).all(|i| (i..NUM_VARIABLES).all(|j| self.coefficients[i][j].is_finite()))
    }
}

const fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
