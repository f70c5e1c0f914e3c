use crate::argmax::{OptimalAction, select_optimal_action};
use crate::config::TestbedConfig;
use crate::drift::Drift;
use crate::error::{BanditError, Result, ensure_non_empty};
use crate::policies::{Decision, EpsilonGreedy, Policy, Random};
use crate::reward::RewardSampler;
use rand_distr::{Distribution, StandardNormal};
use tracing::{debug, trace};

/// Everything recorded for one simulated step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub decision: Decision,
    pub optimal: OptimalAction,
    /// Whether the policy picked the step's optimal action.
    pub is_optimal: bool,
}

/// A single run of a multi-armed bandit with a specific policy
///
/// The `Testbed` owns the true action values of one run and evolves them
/// between steps when drift is configured. Aggregating many runs into
/// learning curves is left to the caller.
#[derive(Clone, Debug)]
pub struct Testbed<P> {
    true_values: Vec<f64>,
    policy: P,
    sampler: RewardSampler,
    drift: Option<Drift>,
}

impl<P> Testbed<P>
where
    P: Policy,
{
    /// Creates a new stationary testbed with unit-variance rewards
    pub fn new(true_values: Vec<f64>, policy: P) -> Result<Self> {
        ensure_non_empty(&true_values)?;
        debug!(arms = true_values.len(), "created testbed");
        Ok(Self {
            true_values,
            policy,
            sampler: RewardSampler::default(),
            drift: None,
        })
    }

    /// Replaces the reward sampler
    #[must_use]
    pub fn with_sampler(mut self, sampler: RewardSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Makes the bandit non-stationary
    #[must_use]
    pub fn with_drift(mut self, drift: Drift) -> Self {
        self.drift = Some(drift);
        self
    }

    /// Advance the run by one step
    ///
    /// Drift (if any) is applied first; rewards are then sampled from the
    /// drifted values, the optimal action is located among them, and the
    /// policy makes its decision on the same values.
    pub fn step(&mut self, rng: &mut dyn rand::RngCore) -> Result<Step> {
        if let Some(drift) = &self.drift {
            self.true_values = drift.apply(&self.true_values, rng);
        }

        let rewards = self.sampler.sample(&self.true_values, rng)?;
        let optimal = select_optimal_action(&self.true_values, &rewards, rng)?;
        let decision = self.policy.choose(&self.true_values, &self.sampler, rng)?;
        let is_optimal = decision.action == optimal.action;

        trace!(
            action = decision.action,
            reward = decision.reward,
            greedy = decision.is_greedy,
            optimal = optimal.action,
            "step"
        );

        Ok(Step {
            decision,
            optimal,
            is_optimal,
        })
    }

    /// Run `steps` consecutive steps
    pub fn run(&mut self, steps: usize, rng: &mut dyn rand::RngCore) -> Result<Vec<Step>> {
        (0..steps).map(|_| self.step(rng)).collect()
    }

    /// Start a fresh run with new true values
    pub fn reset(&mut self, true_values: Vec<f64>) -> Result<()> {
        ensure_non_empty(&true_values)?;
        debug!(arms = true_values.len(), "reset testbed");
        self.true_values = true_values;
        Ok(())
    }

    /// Gets the current true action values
    pub fn true_values(&self) -> &[f64] {
        &self.true_values
    }

    /// Number of actions
    pub fn n_actions(&self) -> usize {
        self.true_values.len()
    }

    /// Gets a reference to the policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Gets a mutable reference to the policy
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Gets the reward sampler
    pub fn sampler(&self) -> &RewardSampler {
        &self.sampler
    }

    /// Gets the drift, if the bandit is non-stationary
    pub fn drift(&self) -> Option<&Drift> {
        self.drift.as_ref()
    }
}

/// Draws `n` true values from a normal distribution centred on zero.
pub fn initial_values(n: usize, std: f64, rng: &mut dyn rand::RngCore) -> Result<Vec<f64>> {
    if !std.is_finite() || std < 0.0 {
        return Err(BanditError::InvalidParameter {
            message: format!("initial value std must be finite and >= 0, got {std}"),
        });
    }
    Ok((0..n)
        .map(|_| {
            let z: f64 = StandardNormal.sample(rng);
            std * z
        })
        .collect())
}

// Convenience constructors for common policies
impl Testbed<EpsilonGreedy> {
    /// Create an epsilon-greedy testbed
    pub fn epsilon_greedy(true_values: Vec<f64>, epsilon: f64) -> Result<Self> {
        Self::new(true_values, EpsilonGreedy::new(epsilon)?)
    }

    /// Create an epsilon-greedy testbed from a validated config
    ///
    /// Initial true values are drawn from `rng`.
    pub fn from_config(config: &TestbedConfig, rng: &mut dyn rand::RngCore) -> Result<Self> {
        config.validate()?;
        let values = initial_values(config.arms, config.initial_value_std, rng)?;
        let mut testbed = Self::epsilon_greedy(values, config.epsilon)?
            .with_sampler(RewardSampler::new(config.reward_noise_std)?);
        if let Some(scale) = config.drift_scale {
            testbed = testbed.with_drift(Drift::new(scale)?);
        }
        Ok(testbed)
    }
}

impl Testbed<Random> {
    /// Create a random testbed
    pub fn random(true_values: Vec<f64>) -> Result<Self> {
        Self::new(true_values, Random)
    }
}

/// Builder for creating testbeds with a fluent API
pub struct TestbedBuilder<P> {
    true_values: Option<Vec<f64>>,
    policy: Option<P>,
    sampler: RewardSampler,
    drift: Option<Drift>,
}

impl<P> Default for TestbedBuilder<P> {
    fn default() -> Self {
        Self {
            true_values: None,
            policy: None,
            sampler: RewardSampler::default(),
            drift: None,
        }
    }
}

impl<P> TestbedBuilder<P>
where
    P: Policy,
{
    /// Set the true action values
    pub fn true_values(mut self, values: Vec<f64>) -> Self {
        self.true_values = Some(values);
        self
    }

    /// Set the policy
    pub fn policy(mut self, policy: P) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the reward sampler
    pub fn sampler(mut self, sampler: RewardSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Set the drift
    pub fn drift(mut self, drift: Drift) -> Self {
        self.drift = Some(drift);
        self
    }

    /// Build the testbed
    pub fn build(self) -> Result<Testbed<P>> {
        let true_values = self.true_values.ok_or(BanditError::InvalidConfig {
            message: "true values not specified".into(),
        })?;

        let policy = self.policy.ok_or(BanditError::InvalidConfig {
            message: "policy not specified".into(),
        })?;

        let mut testbed = Testbed::new(true_values, policy)?.with_sampler(self.sampler);
        testbed.drift = self.drift;
        Ok(testbed)
    }
}

impl<P> Testbed<P> {
    /// Create a new builder for constructing a testbed
    pub fn builder() -> TestbedBuilder<P> {
        TestbedBuilder::default()
    }
}
