use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Clickatell account user name (`user`).
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct User(String);

impl User {
    /// Query field name used by Clickatell (`user`).
    pub const FIELD: &'static str = "user";

    /// Create a validated [`User`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Clickatell account password (`password`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query field name used by Clickatell (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Clickatell HTTP API id (`api_id`).
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct ApiId(String);

impl ApiId {
    /// Query field name used by Clickatell (`api_id`).
    pub const FIELD: &'static str = "api_id";

    /// Create a validated [`ApiId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated api id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Session token issued by `http/auth` and sent as `session_id` on every later call.
///
/// Invariant: non-empty after trimming.
pub struct SessionId(String);

impl SessionId {
    /// Query field name used by Clickatell (`session_id`).
    pub const FIELD: &'static str = "session_id";

    /// Create a validated [`SessionId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionId(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_and_api_id_are_kept_verbatim() {
        assert_eq!(User::new("  alice ").unwrap().as_str(), "  alice ");
        assert_eq!(ApiId::new("3141592 ").unwrap().as_str(), "3141592 ");
        assert!(User::new(" \t").is_err());
        assert!(ApiId::new("").is_err());
    }

    #[test]
    fn password_keeps_whitespace() {
        assert_eq!(Password::new(" secret ").unwrap().as_str(), " secret ");
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let password = Password::new("hunter2").unwrap();
        let session = SessionId::new("abc123").unwrap();
        assert!(!format!("{password:?}").contains("hunter2"));
        assert!(!format!("{session:?}").contains("abc123"));
    }

    #[test]
    fn session_id_rejects_blank() {
        assert!(matches!(
            SessionId::new("  "),
            Err(ValidationError::Empty {
                field: SessionId::FIELD
            })
        ));
    }
}
