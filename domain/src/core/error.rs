//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid temperature {0}: must be a finite value between 0.0 and 2.0")]
    InvalidTemperature(f32),

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}
