use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tracing::{info, warn};
use crate::config::{Settings, UserCredential};
use crate::errors::{CheckInError, CheckInResult};
use crate::models::Operator;

/// Verifies operator credentials.
///
/// Implementations decide where credentials live; callers only see the authenticated `Operator`.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Checks a username/password pair
    ///
    /// # Returns
    ///
    /// * `Ok(Operator)` for a known user with the matching password
    /// * `Err(CheckInError::AuthenticationFailed)` otherwise
    async fn verify(&self, username: &str, password: &str) -> CheckInResult<Operator>;
}

/// Exact-match lookup over a fixed set of configured users
pub struct StaticCredentialProvider {
    users: HashMap<String, Secret<String>>,
    delay: Duration,
}

impl StaticCredentialProvider {
    pub fn new(users: &[UserCredential]) -> Self {
        Self {
            users: users.iter()
                .map(|user| (user.username.clone(), user.password.clone()))
                .collect(),
            delay: Duration::ZERO,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.users).with_delay(Duration::from_millis(settings.delays.login_ms))
    }

    /// Waits this long before answering each verification
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl AuthProvider for StaticCredentialProvider {
    async fn verify(&self, username: &str, password: &str) -> CheckInResult<Operator> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.users.get(username) {
            Some(expected) if expected.expose_secret() == password => {
                info!("Operator {} logged in", username);
                Ok(Operator::new(username))
            }
            _ => {
                warn!("Rejected login attempt for '{}'", username);
                Err(CheckInError::AuthenticationFailed)
            }
        }
    }
}
