//! Configuration for a single testbed run.

use serde::{Deserialize, Serialize};

use crate::error::{BanditError, Result};

/// Parameters of one simulated run.
///
/// All fields have defaults matching the classic 10-armed testbed, so a
/// partially specified config deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestbedConfig {
    /// Number of actions.
    /// Default: 10
    pub arms: usize,

    /// Exploration probability of the epsilon-greedy policy.
    /// Default: 0.1
    pub epsilon: f64,

    /// Standard deviation of sampled rewards around true values.
    /// Default: 1.0
    pub reward_noise_std: f64,

    /// Per-step drift of true values. `None` keeps the bandit stationary.
    /// Default: None
    pub drift_scale: Option<f64>,

    /// Standard deviation of the initial true values, drawn around zero.
    /// Default: 1.0
    pub initial_value_std: f64,
}

impl Default for TestbedConfig {
    fn default() -> Self {
        Self {
            arms: 10,
            epsilon: 0.1,
            reward_noise_std: 1.0,
            drift_scale: None,
            initial_value_std: 1.0,
        }
    }
}

impl TestbedConfig {
    /// Checks every field, reporting the first one out of range.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(BanditError::InvalidConfig { message });

        if self.arms == 0 {
            return invalid("arms must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return invalid(format!("epsilon must be in [0, 1], got {}", self.epsilon));
        }
        if !self.reward_noise_std.is_finite() || self.reward_noise_std < 0.0 {
            return invalid(format!(
                "reward_noise_std must be finite and >= 0, got {}",
                self.reward_noise_std
            ));
        }
        if let Some(scale) = self.drift_scale.filter(|s| !s.is_finite() || *s < 0.0) {
            return invalid(format!("drift_scale must be finite and >= 0, got {scale}"));
        }
        if !self.initial_value_std.is_finite() || self.initial_value_std < 0.0 {
            return invalid(format!(
                "initial_value_std must be finite and >= 0, got {}",
                self.initial_value_std
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TestbedConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TestbedConfig =
            serde_json::from_str(r#"{"arms": 4, "drift_scale": 0.01}"#).unwrap();
        assert_eq!(config.arms, 4);
        assert_eq!(config.drift_scale, Some(0.01));
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.reward_noise_std, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let bad = [
            TestbedConfig {
                arms: 0,
                ..Default::default()
            },
            TestbedConfig {
                epsilon: 1.2,
                ..Default::default()
            },
            TestbedConfig {
                reward_noise_std: -1.0,
                ..Default::default()
            },
            TestbedConfig {
                drift_scale: Some(f64::NAN),
                ..Default::default()
            },
            TestbedConfig {
                initial_value_std: f64::INFINITY,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(BanditError::InvalidConfig { .. })
            ));
        }
    }
}
