use crate::domain::validation::ValidationError;
use crate::domain::value::{ApiId, Password, User};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account credentials sent to `http/auth` when a client is created.
pub struct Credentials {
    user: User,
    password: Password,
    api_id: ApiId,
}

impl Credentials {
    /// Build credentials from already validated parts.
    pub fn new(user: User, password: Password, api_id: ApiId) -> Self {
        Self {
            user,
            password,
            api_id,
        }
    }

    /// Validate raw strings and build credentials.
    pub fn parse(
        user: impl Into<String>,
        password: impl Into<String>,
        api_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            User::new(user)?,
            Password::new(password)?,
            ApiId::new(api_id)?,
        ))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn api_id(&self) -> &ApiId {
        &self.api_id
    }
}
