use super::{Decision, Policy, Selection};
use crate::argmax::{argmax_random_tie, maximum, tied_indices};
use crate::error::{BanditError, Result};
use crate::reward::RewardSampler;
use rand::Rng;

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

fn check_epsilon(epsilon: f64) -> Result<()> {
    if (0.0..=1.0).contains(&epsilon) {
        Ok(())
    } else {
        Err(BanditError::InvalidParameter {
            message: format!("epsilon must be between 0 and 1, got {epsilon}"),
        })
    }
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon
    pub fn new(epsilon: f64) -> Result<Self> {
        check_epsilon(epsilon)?;
        Ok(Self { epsilon })
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Sets the epsilon value
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        check_epsilon(epsilon)?;
        self.epsilon = epsilon;
        Ok(())
    }
}

impl Policy for EpsilonGreedy {
    fn select(&self, values: &[f64], rng: &mut dyn rand::RngCore) -> Result<Selection> {
        // Reject bad input before the draw so both branches fail alike
        maximum(values)?;

        // Explore with probability epsilon
        let r: f64 = rng.random_range(0.0..1.0);
        if r < self.epsilon {
            Ok(Selection {
                action: rng.random_range(0..values.len()),
                is_greedy: false,
            })
        } else {
            let (action, _) = argmax_random_tie(values, rng)?;
            Ok(Selection {
                action,
                is_greedy: true,
            })
        }
    }

    fn action_probabilities(&self, values: &[f64]) -> Result<Vec<f64>> {
        let ties = tied_indices(values, maximum(values)?);

        let explore = self.epsilon / values.len() as f64;
        let exploit = (1.0 - self.epsilon) / ties.len() as f64;
        let mut probs = vec![explore; values.len()];
        for i in ties {
            probs[i] += exploit;
        }
        Ok(probs)
    }
}

/// Runs one epsilon-greedy step over `values` with unit-variance rewards.
///
/// Returns the chosen action's value, its sampled reward and whether the
/// step exploited.
pub fn choose_one_action(
    values: &[f64],
    epsilon: f64,
    rng: &mut dyn rand::RngCore,
) -> Result<Decision> {
    EpsilonGreedy::new(epsilon)?.choose(values, &RewardSampler::default(), rng)
}
