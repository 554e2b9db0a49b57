use thiserror::Error;

use crate::domain::structured::RawFallback;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    /// The model answered, but not in the shape that was asked for.
    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn external(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<RawFallback> for DomainError {
    fn from(fallback: RawFallback) -> Self {
        Self::InvalidModelOutput(fallback.error)
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
