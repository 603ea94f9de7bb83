// src/dtos/user.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::user::User;

/// Raw request body for create/update.
///
/// Every field is optional at decode time so that a missing `username` or
/// `password` surfaces as a 400 with a proper message instead of a serde
/// rejection. The `id` field is accepted but never consulted: the identifier
/// is owned by storage on create and by the request path on update.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Validated, identifier-free shape handed to the service layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl UserPayload {
    /// Mapping boundary between wire shape and domain shape. Drops any
    /// client-supplied id and enforces the non-null field constraints.
    pub fn validated(self) -> Result<NewUser, AppError> {
        let username = self
            .username
            .ok_or_else(|| AppError::validation("username must not be null"))?;
        let password = self
            .password
            .ok_or_else(|| AppError::validation("password must not be null"))?;

        Ok(NewUser { username, password })
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_drops_supplied_id() {
        let payload = UserPayload {
            id: Some(999),
            username: Some("user".into()),
            password: Some("pass".into()),
        };

        let new_user = payload.validated().unwrap();
        assert_eq!(new_user.username, "user");
        assert_eq!(new_user.password, "pass");
    }

    #[test]
    fn validated_rejects_missing_username() {
        let payload = UserPayload {
            id: None,
            username: None,
            password: Some("pass".into()),
        };

        match payload.validated() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "username must not be null"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn validated_rejects_missing_password() {
        let payload = UserPayload {
            id: None,
            username: Some("user".into()),
            password: None,
        };

        assert!(matches!(payload.validated(), Err(AppError::ValidationError(_))));
    }
}
