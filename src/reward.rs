//! Stochastic reward generation around per-action true values.

use rand_distr::{Distribution, StandardNormal};

use crate::error::{BanditError, Result, ensure_non_empty};

/// Standard deviation of reward noise when none is configured.
pub const DEFAULT_REWARD_NOISE_STD: f64 = 1.0;

/// Samples Gaussian rewards centred on each action's true value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardSampler {
    noise_std: f64,
}

impl Default for RewardSampler {
    fn default() -> Self {
        Self {
            noise_std: DEFAULT_REWARD_NOISE_STD,
        }
    }
}

impl RewardSampler {
    /// Creates a sampler whose rewards have standard deviation `noise_std`.
    ///
    /// # Errors
    /// `InvalidParameter` if `noise_std` is negative or not finite.
    pub fn new(noise_std: f64) -> Result<Self> {
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(BanditError::InvalidParameter {
                message: format!("reward noise std must be finite and >= 0, got {noise_std}"),
            });
        }
        Ok(Self { noise_std })
    }

    /// Standard deviation of the reward noise
    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }

    /// Draws one reward for an action with the given true value.
    pub fn sample_one(&self, value: f64, rng: &mut dyn rand::RngCore) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        value + self.noise_std * z
    }

    /// Draws one reward per action; `rewards[i]` belongs to action `i`.
    ///
    /// # Errors
    /// `InvalidActionSet` if `values` is empty.
    pub fn sample(&self, values: &[f64], rng: &mut dyn rand::RngCore) -> Result<Vec<f64>> {
        ensure_non_empty(values)?;
        Ok(values.iter().map(|&v| self.sample_one(v, rng)).collect())
    }
}

/// Samples one unit-variance reward per action.
pub fn sample_rewards(values: &[f64], rng: &mut dyn rand::RngCore) -> Result<Vec<f64>> {
    RewardSampler::default().sample(values, rng)
}
