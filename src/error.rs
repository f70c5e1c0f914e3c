//! Error types for the bandit testbed.

use thiserror::Error;

/// Result type alias for bandit operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors that can occur during bandit operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    /// The action set is empty, or value and reward vectors disagree.
    #[error("invalid action set: {message}")]
    InvalidActionSet { message: String },

    /// Invalid parameter value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A testbed configuration failed validation.
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}

impl BanditError {
    pub(crate) fn empty_action_set() -> Self {
        BanditError::InvalidActionSet {
            message: "at least one action is required".to_string(),
        }
    }
}

/// Fails with `InvalidActionSet` when `values` is empty.
pub(crate) fn ensure_non_empty(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        Err(BanditError::empty_action_set())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BanditError::empty_action_set();
        assert_eq!(
            err.to_string(),
            "invalid action set: at least one action is required"
        );

        let err = BanditError::InvalidParameter {
            message: "epsilon must be between 0 and 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter: epsilon must be between 0 and 1"
        );
    }

    #[test]
    fn test_ensure_non_empty() {
        assert!(ensure_non_empty(&[0.5]).is_ok());
        assert_eq!(ensure_non_empty(&[]), Err(BanditError::empty_action_set()));
    }
}
