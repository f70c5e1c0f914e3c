//! Random-walk drift of true action values, for non-stationary bandits.

use rand_distr::{Distribution, StandardNormal};

use crate::error::{BanditError, Result};

/// Adds independent zero-mean Gaussian noise to every true value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    scale: f64,
}

impl Drift {
    /// Creates a drift with standard deviation `scale` per step.
    ///
    /// # Errors
    /// `InvalidParameter` if `scale` is negative or not finite.
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(BanditError::InvalidParameter {
                message: format!("drift scale must be finite and >= 0, got {scale}"),
            });
        }
        Ok(Self { scale })
    }

    /// Gets the per-step standard deviation
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns a perturbed copy of `values`.
    pub fn apply(&self, values: &[f64], rng: &mut dyn rand::RngCore) -> Vec<f64> {
        values
            .iter()
            .map(|&v| {
                let z: f64 = StandardNormal.sample(rng);
                v + self.scale * z
            })
            .collect()
    }
}

/// Perturbs `values` with Gaussian noise of standard deviation `scale`.
pub fn add_drift(values: &[f64], scale: f64, rng: &mut dyn rand::RngCore) -> Result<Vec<f64>> {
    Ok(Drift::new(scale)?.apply(values, rng))
}
