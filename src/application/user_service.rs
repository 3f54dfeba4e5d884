use super::{AppError, AppResult};
use crate::domain::*;
use std::fmt;
use std::str::FromStr;

/// A lifecycle transition requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Register,
    Activate,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Register => write!(f, "register"),
            Step::Activate => write!(f, "activate"),
        }
    }
}

impl FromStr for Step {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "register" => Ok(Step::Register),
            "activate" => Ok(Step::Activate),
            _ => Err(AppError::UnknownStep(s.to_string())),
        }
    }
}

/// Owns a single user and drives its transitions.
pub struct UserService {
    user: User,
}

impl Default for UserService {
    fn default() -> Self {
        Self::new(User::new())
    }
}

impl UserService {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn register(&mut self) -> AppResult<()> {
        self.user.register()?;
        tracing::info!(user_id = %self.user.id, "user registered");
        Ok(())
    }

    pub fn activate(&mut self) -> AppResult<()> {
        self.user.activate()?;
        tracing::info!(user_id = %self.user.id, "user activated");
        Ok(())
    }

    pub fn apply(&mut self, step: Step) -> AppResult<()> {
        tracing::debug!(%step, user_id = %self.user.id, "applying step");
        match step {
            Step::Register => self.register(),
            Step::Activate => self.activate(),
        }
    }

    /// Parse a raw step name and apply it
    pub fn apply_named(&mut self, name: &str) -> AppResult<Step> {
        let step: Step = name.parse()?;
        self.apply(step)?;
        Ok(step)
    }
}
