//! Authenticatable Capability
//!
//! Shared authentication contract of every client variant. Implementors
//! only expose their stored identifier and password; the password policy,
//! identifier normalization and attempt limit live in default methods so
//! individual and corporate clients cannot drift apart.

use platform::digits::normalize;
use platform::password::{self, SecretPassword};

/// Advisory number of attempts a caller should allow before locking
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub trait Authenticatable {
    /// Advisory attempt limit; the capability itself keeps no counter
    const MAX_ATTEMPTS: u32 = DEFAULT_MAX_ATTEMPTS;

    /// Identifier as stored at construction (formatted or not)
    fn stored_identifier(&self) -> &str;

    /// Stored secret
    fn credential(&self) -> &SecretPassword;

    fn max_attempts(&self) -> u32 {
        Self::MAX_ATTEMPTS
    }

    /// Password strength policy, see [`platform::password`]
    fn is_strong_password(&self, password: &str) -> bool {
        password::is_strong_password(password)
    }

    /// Check an identifier/password pair
    ///
    /// 1. A password failing the strength policy never authenticates
    /// 2. Identifiers are compared on their digit-only form
    /// 3. The password must equal the stored one exactly
    ///
    /// Never fails: every rejection is a plain `false`, whatever the reason.
    fn authenticate(&self, identifier: &str, password: &str) -> bool {
        let authenticated = self.is_strong_password(password)
            && normalize(identifier) == normalize(self.stored_identifier())
            && self.credential().matches(password);

        tracing::debug!(authenticated, "Authentication attempt");
        authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        identifier: &'static str,
        secret: SecretPassword,
    }

    impl Authenticatable for Fixture {
        fn stored_identifier(&self) -> &str {
            self.identifier
        }

        fn credential(&self) -> &SecretPassword {
            &self.secret
        }
    }

    struct Strict(Fixture);

    impl Authenticatable for Strict {
        const MAX_ATTEMPTS: u32 = 1;

        fn stored_identifier(&self) -> &str {
            self.0.stored_identifier()
        }

        fn credential(&self) -> &SecretPassword {
            self.0.credential()
        }
    }

    fn fixture(password: &str) -> Fixture {
        Fixture {
            identifier: "123.456.789-09",
            secret: SecretPassword::new(password),
        }
    }

    #[test]
    fn test_default_max_attempts() {
        assert_eq!(fixture("Senha@Forte123").max_attempts(), 3);
        assert_eq!(Strict(fixture("Senha@Forte123")).max_attempts(), 1);
    }

    #[test]
    fn test_authenticate_normalizes_identifier() {
        let f = fixture("Senha@Forte123");
        assert!(f.authenticate("123.456.789-09", "Senha@Forte123"));
        assert!(f.authenticate("12345678909", "Senha@Forte123"));
        assert!(f.authenticate("123 456 789 09", "Senha@Forte123"));
        assert!(!f.authenticate("987.654.321-00", "Senha@Forte123"));
    }

    #[test]
    fn test_weak_stored_password_never_authenticates() {
        let f = fixture("senha123");
        assert!(!f.authenticate("123.456.789-09", "senha123"));
    }

    #[test]
    fn test_strength_checked_on_supplied_password() {
        let f = fixture("Senha@Forte123");
        assert!(!f.authenticate("123.456.789-09", "Sen@1Ab"));
        assert!(f.is_strong_password("Senha@Forte123"));
        assert!(!f.is_strong_password("Sen@1Ab"));
    }
}
