use serde::{Deserialize, Serialize};

pub const HANDLE_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub username: String,
    pub password: String,
}

/// Why a sign-up was rejected before it reached the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error("pick a username")]
    EmptyUsername,
    #[error("usernames are at most {HANDLE_MAX_LEN} characters")]
    UsernameTooLong,
    #[error("usernames use lowercase letters, digits, '_' and '.' only")]
    UsernameCharacter(char),
    #[error("usernames can't start or end with '.'")]
    UsernameDotAtEdge,
    #[error("passwords are at least {PASSWORD_MIN_LEN} characters")]
    PasswordTooShort,
}

impl CreateAccount {
    /// Check the handle and password the way the backend will.
    ///
    /// Handles appear as `@name` in the feed, so they are limited to
    /// `[a-z0-9_.]` with no leading or trailing dot.
    pub fn validate(&self) -> Result<(), SignUpError> {
        let handle = self.username.as_str();

        if handle.is_empty() {
            return Err(SignUpError::EmptyUsername);
        }
        if handle.chars().count() > HANDLE_MAX_LEN {
            return Err(SignUpError::UsernameTooLong);
        }
        if let Some(c) = handle.chars().find(|&c| {
            !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.')
        }) {
            return Err(SignUpError::UsernameCharacter(c));
        }
        if handle.starts_with('.') || handle.ends_with('.') {
            return Err(SignUpError::UsernameDotAtEdge);
        }
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            return Err(SignUpError::PasswordTooShort);
        }

        Ok(())
    }
}
