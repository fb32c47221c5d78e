//! Driving port for admin login.
//!
//! In hexagonal terms this is a *driving* port: the HTTP adapter calls it to
//! authenticate credentials without knowing where the admin account comes
//! from. Handler tests substitute a test double instead of configuration.

use async_trait::async_trait;

use crate::domain::{AdminCredentials, AdminIdentity, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated identity.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AdminIdentity, Error>;
}

/// Authenticator backed by the environment-configured admin account.
#[derive(Debug, Clone)]
pub struct ConfiguredLoginService {
    admin: AdminCredentials,
}

impl ConfiguredLoginService {
    /// Wrap the configured admin account.
    #[must_use]
    pub fn new(admin: AdminCredentials) -> Self {
        Self { admin }
    }
}

#[async_trait]
impl LoginService for ConfiguredLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AdminIdentity, Error> {
        if self.admin.matches(credentials) {
            Ok(AdminIdentity::new(self.admin.username()))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
