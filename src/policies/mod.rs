mod epsilon_greedy;
mod random;

pub use epsilon_greedy::{EpsilonGreedy, choose_one_action};
pub use random::Random;

use crate::error::Result;
use crate::reward::RewardSampler;

/// An action picked by a policy, before its reward is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub action: usize,
    /// True when the action was picked by exploiting the best value.
    pub is_greedy: bool,
}

/// Outcome of one decision step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub action: usize,
    /// Value the policy saw for the chosen action.
    pub value: f64,
    /// Reward sampled around `value`.
    pub reward: f64,
    pub is_greedy: bool,
}

/// Core trait for action-selection policies
///
/// Note: This trait uses `dyn rand::RngCore` instead of a generic parameter
/// to maintain object-safety, allowing `Box<dyn Policy>` to be used.
pub trait Policy: Send + Sync {
    /// Select an action index given one value per action
    fn select(&self, values: &[f64], rng: &mut dyn rand::RngCore) -> Result<Selection>;

    /// Probability of each action being selected for the given values
    fn action_probabilities(&self, values: &[f64]) -> Result<Vec<f64>>;

    /// Select an action and sample its reward from its value
    fn choose(
        &self,
        values: &[f64],
        sampler: &RewardSampler,
        rng: &mut dyn rand::RngCore,
    ) -> Result<Decision> {
        let Selection { action, is_greedy } = self.select(values, rng)?;
        let value = values[action];
        Ok(Decision {
            action,
            value,
            reward: sampler.sample_one(value, rng),
            is_greedy,
        })
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn select(&self, values: &[f64], rng: &mut dyn rand::RngCore) -> Result<Selection> {
        (**self).select(values, rng)
    }

    fn action_probabilities(&self, values: &[f64]) -> Result<Vec<f64>> {
        (**self).action_probabilities(values)
    }
}
