use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Closed set of user domain error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UserNotRegistered,
    UserAlreadyActivated,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserNotRegistered => "user_not_registered",
            Self::UserAlreadyActivated => "user_already_activated",
        }
    }

    /// Canonical message attached when a transition rejects with this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::UserNotRegistered => "User must be registered first",
            Self::UserAlreadyActivated => "User already activated",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable, classifiable failure of a user lifecycle transition.
///
/// Fields are private; once built the error cannot change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error {code}: {message}")]
pub struct UserDomainError {
    code: ErrorCode,
    message: String,
}

impl UserDomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Formatted as `Error <code>: <message>`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

pub type DomainResult<T> = Result<T, UserDomainError>;
