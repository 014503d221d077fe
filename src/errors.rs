use std::result::Result as StdResult;

use thiserror::Error;

/// Rejection raised when an entry or multiplier fails input validation.
///
/// Validation failures never touch existing state: the attempted entry is
/// discarded and the caller decides how to surface the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("amount must be greater than zero (got {0})")]
    InvalidAmount(f64),
    #[error("amount must not exceed 1000000000000 (got {0})")]
    AmountTooLarge(f64),
    #[error("multiplier must be a finite, non-negative number (got {0})")]
    InvalidMultiplier(f64),
    #[error("multiplier {0} is not one of the available options")]
    UnsupportedMultiplier(f64),
    #[error("`{0}` is not a valid amount")]
    UnparsableAmount(String),
}

/// Unified error type for the library layers.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_readable() {
        assert_eq!(
            ValidationError::EmptyLabel.to_string(),
            "label must not be empty"
        );
        assert!(ValidationError::InvalidAmount(-5.0)
            .to_string()
            .contains("-5"));
    }

    #[test]
    fn io_errors_map_to_storage() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let mapped = BudgetError::from(err);
        assert!(matches!(mapped, BudgetError::StorageError(message) if message.contains("gone")));
    }
}
