//! Sign In Use Case
//!
//! Caller-side attempt tracking around [`Authenticatable::authenticate`].
//! The capability only advertises a limit; this tracker enforces it for one
//! client on behalf of one caller.

use crate::application::config::AuthConfig;
use crate::domain::authenticatable::Authenticatable;
use crate::error::{AuthError, AuthResult};

/// Result of one sign-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    Authenticated,
    /// Credentials rejected, `remaining` attempts left before locking
    Rejected { remaining: u32 },
    Locked,
}

impl SignInOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SignInOutcome::Authenticated)
    }

    /// Turn a failed outcome into an [`AuthError`]
    pub fn into_result(self) -> AuthResult<()> {
        match self {
            SignInOutcome::Authenticated => Ok(()),
            SignInOutcome::Rejected { .. } => Err(AuthError::InvalidCredentials),
            SignInOutcome::Locked => Err(AuthError::Locked),
        }
    }
}

/// Consecutive failure counter for one client
#[derive(Debug, Clone)]
pub struct SignInAttempts {
    max_attempts: u32,
    failed_count: u32,
}

impl SignInAttempts {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            failed_count: 0,
        }
    }

    /// Use the limit advertised by the client itself
    pub fn for_client<C: Authenticatable>(client: &C) -> Self {
        Self {
            max_attempts: client.max_attempts(),
            failed_count: 0,
        }
    }

    /// Try to authenticate; once locked the client is not consulted anymore
    pub fn attempt<C: Authenticatable>(
        &mut self,
        client: &C,
        identifier: &str,
        password: &str,
    ) -> SignInOutcome {
        if self.is_locked() {
            AuthError::Locked.log();
            return SignInOutcome::Locked;
        }

        if client.authenticate(identifier, password) {
            self.reset();
            return SignInOutcome::Authenticated;
        }

        self.failed_count += 1;
        if self.is_locked() {
            tracing::warn!(
                failed_count = self.failed_count,
                "Client locked after too many failed attempts"
            );
            SignInOutcome::Locked
        } else {
            AuthError::InvalidCredentials.log();
            SignInOutcome::Rejected {
                remaining: self.max_attempts - self.failed_count,
            }
        }
    }

    pub fn is_locked(&self) -> bool {
        self.failed_count >= self.max_attempts
    }

    pub fn failed_count(&self) -> u32 {
        self.failed_count
    }

    /// Clear failures (successful sign-in or operator unlock)
    pub fn reset(&mut self) {
        self.failed_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IndividualClient;

    fn client() -> IndividualClient {
        IndividualClient::new(1, "João da Silva", "123.456.789-09", "Senh@Segura123").unwrap()
    }

    #[test]
    fn test_success_resets_failures() {
        let client = client();
        let mut attempts = SignInAttempts::for_client(&client);

        assert_eq!(
            attempts.attempt(&client, "123.456.789-09", "Errada@Senha123"),
            SignInOutcome::Rejected { remaining: 2 }
        );
        assert_eq!(attempts.failed_count(), 1);

        let outcome = attempts.attempt(&client, "12345678909", "Senh@Segura123");
        assert!(outcome.is_authenticated());
        assert_eq!(attempts.failed_count(), 0);
    }

    #[test]
    fn test_locks_after_max_attempts() {
        let client = client();
        let mut attempts = SignInAttempts::for_client(&client);

        assert_eq!(
            attempts.attempt(&client, "123.456.789-09", "wrong"),
            SignInOutcome::Rejected { remaining: 2 }
        );
        assert_eq!(
            attempts.attempt(&client, "123.456.789-09", "wrong"),
            SignInOutcome::Rejected { remaining: 1 }
        );
        assert_eq!(
            attempts.attempt(&client, "123.456.789-09", "wrong"),
            SignInOutcome::Locked
        );
        assert!(attempts.is_locked());

        // correct credentials no longer help
        assert_eq!(
            attempts.attempt(&client, "123.456.789-09", "Senh@Segura123"),
            SignInOutcome::Locked
        );

        attempts.reset();
        assert!(attempts.attempt(&client, "123.456.789-09", "Senh@Segura123").is_authenticated());
    }

    #[test]
    fn test_configured_limit() {
        let client = client();
        let mut attempts = SignInAttempts::new(&AuthConfig { max_attempts: 1 });
        assert_eq!(
            attempts.attempt(&client, "123.456.789-09", "wrong"),
            SignInOutcome::Locked
        );
    }

    #[test]
    fn test_into_result() {
        assert!(SignInOutcome::Authenticated.into_result().is_ok());
        assert_eq!(
            SignInOutcome::Rejected { remaining: 1 }.into_result(),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(SignInOutcome::Locked.into_result(), Err(AuthError::Locked));
    }
}
