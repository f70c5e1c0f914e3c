//! bandit_testbed: a multi-armed bandit testbed for studying exploration
//! versus exploitation.
//!
//! The crate provides the per-step kernel of the classic k-armed testbed:
//! Gaussian reward sampling around true action values, optional random-walk
//! drift of those values, an argmax that breaks ties uniformly at random, and
//! an epsilon-greedy action chooser. All randomness is injected by the caller.
//!
//! # Quick Start
//!
//! ```
//! use bandit_testbed::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! // One decision over fixed action values
//! let decision = choose_one_action(&[0.2, 1.5, -0.3], 0.1, &mut rng).unwrap();
//! assert!(decision.action < 3);
//!
//! // A whole non-stationary run
//! let mut testbed = Testbed::epsilon_greedy(vec![0.0; 10], 0.1)
//!     .unwrap()
//!     .with_drift(Drift::new(0.01).unwrap());
//! let steps = testbed.run(100, &mut rng).unwrap();
//! assert_eq!(steps.len(), 100);
//! ```

mod argmax;
mod config;
mod drift;
mod error;
pub mod policies;
mod reward;
pub mod rng;
mod testbed;

// Re-export main types
pub use argmax::{OptimalAction, argmax_random_tie, select_optimal_action};
pub use config::TestbedConfig;
pub use drift::{Drift, add_drift};
pub use error::{BanditError, Result};
pub use reward::{DEFAULT_REWARD_NOISE_STD, RewardSampler, sample_rewards};
pub use testbed::{Step, Testbed, TestbedBuilder, initial_values};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bandit_testbed::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{
        Decision, EpsilonGreedy, Policy, Random, Selection, choose_one_action,
    };
    pub use crate::{
        BanditError, Drift, OptimalAction, Result, RewardSampler, Step, Testbed, TestbedConfig,
        add_drift, argmax_random_tie, sample_rewards, select_optimal_action,
    };
}
