use thiserror::Error;

use crate::validation::ValidationResult;

#[derive(Error, Debug)]
pub enum AmortizeError {
    #[error("invalid parameters: {errors}")]
    InvalidParameters {
        errors: ValidationResult,
    },

    #[error("numeric overflow: {quantity} is not finite")]
    NumericOverflow {
        quantity: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AmortizeError {
    /// per-field reasons when the error came from validation
    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            AmortizeError::InvalidParameters { errors } => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AmortizeError>;
