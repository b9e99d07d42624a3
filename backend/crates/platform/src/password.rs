//! Password Strength Policy and Secret Storage
//!
//! Strength rules applied before any credential comparison:
//! - At least [`MIN_PASSWORD_LENGTH`] characters
//! - At least one uppercase letter, one lowercase letter and one digit
//! - At least one character of [`SPECIAL_CHARACTERS`]
//! - No whitespace
//! - Not a well-known weak password
//!
//! Every rule is evaluated independently; [`policy_violations`] reports all
//! of the failed ones at once.
//!
//! ## Storage
//! Passwords are kept as plain text inside [`SecretPassword`], which is
//! zeroized on drop, never cloned and redacted in debug output.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::constant_time_eq;

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Characters accepted as "special"
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_-+=[]{}|;:'\",.<>/?`~";

/// Passwords rejected regardless of decoration (compared lowercase)
///
/// Each entry is matched against the whole password and against its
/// letters-only and digits-only parts. The digits rule also rejects
/// otherwise strong passwords such as `Abc@123456xyz`, whose digits are
/// exactly `123456`.
pub const WEAK_PASSWORDS: &[&str] = &["password", "123456", "qwerty", "111111", "senha"];

// ============================================================================
// Error Types
// ============================================================================

/// A single failed strength rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain an uppercase letter")]
    MissingUppercase,

    #[error("Password must contain a lowercase letter")]
    MissingLowercase,

    #[error("Password must contain a digit")]
    MissingDigit,

    #[error("Password must contain a special character")]
    MissingSpecialCharacter,

    #[error("Password must not contain whitespace")]
    ContainsWhitespace,

    #[error("Password is a well-known weak password")]
    CommonPassword,
}

// ============================================================================
// Policy
// ============================================================================

/// Evaluate every rule and return the ones `password` breaks
///
/// ```
/// use platform::password::{policy_violations, PasswordPolicyError};
///
/// assert!(policy_violations("Senha@Forte123").is_empty());
/// assert_eq!(
///     policy_violations("SenhaForte123"),
///     vec![PasswordPolicyError::MissingSpecialCharacter]
/// );
/// ```
pub fn policy_violations(password: &str) -> Vec<PasswordPolicyError> {
    let mut violations = Vec::new();

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        violations.push(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }
    if !password.chars().any(char::is_uppercase) {
        violations.push(PasswordPolicyError::MissingUppercase);
    }
    if !password.chars().any(char::is_lowercase) {
        violations.push(PasswordPolicyError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordPolicyError::MissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        violations.push(PasswordPolicyError::MissingSpecialCharacter);
    }
    if password.chars().any(char::is_whitespace) {
        violations.push(PasswordPolicyError::ContainsWhitespace);
    }
    if is_common_password(password) {
        violations.push(PasswordPolicyError::CommonPassword);
    }

    violations
}

/// Whether `password` satisfies every strength rule
pub fn is_strong_password(password: &str) -> bool {
    policy_violations(password).is_empty()
}

/// Exact, case-insensitive match against [`WEAK_PASSWORDS`]
///
/// The whole password is checked, then its letters-only and digits-only
/// skeletons, so `Password@123456` matches `password` while
/// `Senha@Forte123` (letters `senhaforte`) does not match `senha`.
fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    let letters: String = lower.chars().filter(|c| c.is_alphabetic()).collect();
    let digits: String = lower.chars().filter(|c| c.is_ascii_digit()).collect();

    [lower, letters, digits]
        .iter()
        .any(|candidate| WEAK_PASSWORDS.contains(&candidate.as_str()))
}

// ============================================================================
// Secret Password
// ============================================================================

/// Stored password of a client
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
/// - Comparison is constant-time for equal lengths
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretPassword(String);

impl SecretPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Exact equality with `candidate`
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for SecretPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
