//! Argmax with uniformly random tie-breaking, and optimal-action bookkeeping.

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::error::{BanditError, Result, ensure_non_empty};

/// The best action of a step and the reward it produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimalAction {
    pub action: usize,
    pub reward: f64,
}

/// Returns the index of the maximum of `xs` together with the maximum.
///
/// Ties are exact floating-point equality; when several indices share the
/// maximum one of them is drawn uniformly at random.
///
/// # Errors
/// `InvalidActionSet` if `xs` is empty or contains NaN.
pub fn argmax_random_tie(xs: &[f64], rng: &mut dyn rand::RngCore) -> Result<(usize, f64)> {
    let max = maximum(xs)?;
    let ties = tied_indices(xs, max);
    let action = match ties.as_slice() {
        [only] => *only,
        _ => ties[rng.random_range(0..ties.len())],
    };
    Ok((action, max))
}

/// Maximum of `xs`, rejecting empty input and NaN.
pub(crate) fn maximum(xs: &[f64]) -> Result<f64> {
    ensure_non_empty(xs)?;
    if let Some(i) = xs.iter().position(|x| x.is_nan()) {
        return Err(BanditError::InvalidActionSet {
            message: format!("value at index {i} is NaN"),
        });
    }

    xs.iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
        .ok_or_else(BanditError::empty_action_set)
}

/// Indices whose value equals `max` exactly, in ascending order.
pub(crate) fn tied_indices(xs: &[f64], max: f64) -> Vec<usize> {
    xs.iter()
        .enumerate()
        .filter(|&(_, &x)| x == max)
        .map(|(i, _)| i)
        .collect()
}

/// Picks the action with the highest sampled reward.
///
/// `values` and `rewards` are matched by position and must have equal,
/// non-zero length.
pub fn select_optimal_action(
    values: &[f64],
    rewards: &[f64],
    rng: &mut dyn rand::RngCore,
) -> Result<OptimalAction> {
    if values.len() != rewards.len() {
        return Err(BanditError::InvalidActionSet {
            message: format!(
                "Mismatched dimensions: values={}, rewards={}",
                values.len(),
                rewards.len()
            ),
        });
    }
    let (action, reward) = argmax_random_tie(rewards, rng)?;
    Ok(OptimalAction { action, reward })
}
