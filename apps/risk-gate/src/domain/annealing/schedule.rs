//! Geometric cooling and Metropolis acceptance.

/// Geometric cooling: `T_{k+1} = rate · T_k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricCooling {
    temperature: f64,
    rate: f64,
}

impl GeometricCooling {
    /// Start a schedule at `initial` temperature.
    #[must_use]
    pub const fn new(initial: f64, rate: f64) -> Self {
        Self {
            temperature: initial,
            rate,
        }
    }

    /// Current temperature.
    #[inline]
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Cool by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.temperature *= self.rate;
    }
}

/// Metropolis probability of moving from `current` to `candidate` energy.
///
/// Improving moves return 1. Once the temperature is zero or has underflowed
/// to a subnormal, worsening and equal-energy moves return 0.
#[inline]
#[must_use]
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        return 1.0;
    }
    if !temperature.is_normal() || temperature < 0.0 {
        return 0.0;
    }
    let probability = ((current - candidate) / temperature).exp();
    if probability.is_nan() { 0.0 } else { probability }
}
