use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use super::UserState;
use crate::domain::error::{DomainResult, ErrorCode, UserDomainError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        UserId(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    state: UserState,
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl User {
    pub fn new() -> Self {
        Self::with_id(UserId::new())
    }

    pub fn with_id(id: UserId) -> Self {
        Self {
            id,
            state: UserState::Invalid,
        }
    }

    pub fn state(&self) -> UserState {
        self.state
    }

    pub fn can_register(&self) -> bool {
        self.state == UserState::Invalid
    }

    pub fn can_activate(&self) -> bool {
        self.state == UserState::Registered
    }

    /// Business rule: only an `Invalid` user can register.
    ///
    /// Every other state is rejected with `UserAlreadyActivated`, including
    /// `Registered`. Callers rely on that single code, so do not split it.
    pub fn register(&mut self) -> DomainResult<()> {
        if !self.can_register() {
            return Err(self.reject(ErrorCode::UserAlreadyActivated));
        }
        self.transition(UserState::Registered);
        Ok(())
    }

    /// Business rule: only a `Registered` user can activate
    pub fn activate(&mut self) -> DomainResult<()> {
        if !self.can_activate() {
            return Err(self.reject(ErrorCode::UserNotRegistered));
        }
        self.transition(UserState::Activated);
        Ok(())
    }

    fn transition(&mut self, next: UserState) {
        debug!(user_id = %self.id, from = %self.state, to = %next, "user transition");
        self.state = next;
    }

    fn reject(&self, code: ErrorCode) -> UserDomainError {
        let err = UserDomainError::from_code(code);
        debug!(
            user_id = %self.id,
            from = %self.state,
            %code,
            message = err.message(),
            "user transition rejected"
        );
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_in(state: UserState) -> User {
        let mut user = User::new();
        if state != UserState::Invalid {
            user.register().unwrap();
        }
        if state == UserState::Activated {
            user.activate().unwrap();
        }
        assert_eq!(user.state(), state);
        user
    }

    #[test]
    fn test_new_user_starts_invalid() {
        let user = User::new();
        assert_eq!(user.state(), UserState::Invalid);
        assert!(user.can_register());
        assert!(!user.can_activate());
    }

    #[test]
    fn test_activate_before_register_fails() {
        let mut user = user_in(UserState::Invalid);
        let err = user.activate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserNotRegistered);
        assert_eq!(err.message(), "User must be registered first");
        assert_eq!(user.state(), UserState::Invalid);
    }

    #[test]
    fn test_register_from_invalid() {
        let mut user = user_in(UserState::Invalid);
        assert!(user.register().is_ok());
        assert_eq!(user.state(), UserState::Registered);
    }

    #[test]
    fn test_activate_from_registered() {
        let mut user = user_in(UserState::Registered);
        assert!(user.activate().is_ok());
        assert_eq!(user.state(), UserState::Activated);
    }

    #[test]
    fn test_activate_twice_fails_not_registered() {
        let mut user = user_in(UserState::Activated);
        let err = user.activate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserNotRegistered);
        assert_eq!(user.state(), UserState::Activated);
    }

    // Known quirk: re-registering a registered user reports
    // `UserAlreadyActivated`, not a distinct "already registered" code.
    #[test]
    fn test_register_twice_reports_already_activated() {
        let mut user = user_in(UserState::Registered);
        let err = user.register().unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserAlreadyActivated);
        assert_eq!(err.message(), "User already activated");
        assert_eq!(user.state(), UserState::Registered);
    }

    #[test]
    fn test_register_after_activation_fails() {
        let mut user = user_in(UserState::Activated);
        let err = user.register().unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserAlreadyActivated);
        assert_eq!(user.state(), UserState::Activated);
    }

    #[test]
    fn test_user_json_round_trip() {
        let mut user = User::new();
        user.register().unwrap();

        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, user);
        assert_eq!(restored.state(), UserState::Registered);
    }

    #[test]
    fn test_user_json_shape() {
        let id = UserId::from(Uuid::nil());
        let user = User::with_id(id);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "state": "invalid"
            })
        );
    }
}
