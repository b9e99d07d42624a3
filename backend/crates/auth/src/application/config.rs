//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::env::VarError;

use kernel::error::app_error::{AppError, AppResult};

use crate::domain::authenticatable::DEFAULT_MAX_ATTEMPTS;

/// Environment variable overriding [`AuthConfig::max_attempts`]
pub const MAX_ATTEMPTS_ENV: &str = "AUTH_MAX_ATTEMPTS";

/// Auth application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Consecutive failures tolerated by a sign-in tracker before locking
    pub max_attempts: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl AuthConfig {
    /// Load from the process environment, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Load using an arbitrary key lookup shaped like [`std::env::var`]
    ///
    /// A missing key keeps the default; a value that is not unicode or not
    /// a positive integer is an error.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = Self::default();

        let raw = match lookup(MAX_ATTEMPTS_ENV) {
            Err(VarError::NotPresent) => None,
            other => Some(other?),
        };

        if let Some(raw) = raw {
            let max_attempts: u32 = raw.trim().parse()?;
            if max_attempts == 0 {
                return Err(AppError::invalid_argument(format!(
                    "{} must be at least 1",
                    MAX_ATTEMPTS_ENV
                )));
            }
            config.max_attempts = max_attempts;
        }

        Ok(config)
    }
}
