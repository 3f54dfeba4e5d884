use crate::domain::UserDomainError;
use crate::ports::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown step: {0}")]
    UnknownStep(String),
}

impl AppError {
    /// Domain errors are the classified ones; anything else is unexpected.
    pub fn as_domain(&self) -> Option<&UserDomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
