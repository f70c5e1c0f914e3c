use super::{Policy, Selection};
use crate::error::{Result, ensure_non_empty};
use rand::Rng;

/// Random selection policy - selects actions uniformly at random
#[derive(Clone, Copy, Debug, Default)]
pub struct Random;

impl Policy for Random {
    fn select(&self, values: &[f64], rng: &mut dyn rand::RngCore) -> Result<Selection> {
        ensure_non_empty(values)?;
        Ok(Selection {
            action: rng.random_range(0..values.len()),
            is_greedy: false,
        })
    }

    fn action_probabilities(&self, values: &[f64]) -> Result<Vec<f64>> {
        ensure_non_empty(values)?;
        let prob = 1.0 / values.len() as f64;
        Ok(vec![prob; values.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_select() {
        let values = [0.5, 2.0, -1.0];
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let choice = Random.select(&values, &mut rng).unwrap();
        assert!(choice.action < values.len());
        assert!(!choice.is_greedy);
    }

    #[test]
    fn test_random_probabilities() {
        let probs = Random.action_probabilities(&[1.0, 2.0, 3.0]).unwrap();

        assert_eq!(probs.len(), 3);
        for prob in probs {
            assert!((prob - 1.0 / 3.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_random_empty() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        assert!(Random.select(&[], &mut rng).is_err());
        assert!(Random.action_probabilities(&[]).is_err());
    }
}
