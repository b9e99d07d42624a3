//! Auth (Authentication) Module
//!
//! Layered structure:
//! - `domain/` - Authenticatable capability, client entities, value objects
//! - `application/` - Configuration and sign-in attempt tracking
//!
//! ## Features
//! - Individual clients identified by an 11-digit taxpayer identifier
//! - Corporate clients identified by a 14-digit taxpayer identifier
//! - Fail-fast construction: an existing client always holds a valid identifier
//! - Authentication gated by a password strength policy
//!
//! ## Security Model
//! - Identifiers compare on their digit-only form
//! - Authentication answers `true`/`false` without saying which factor failed
//! - Stored passwords are zeroized on drop and never exposed
//! - Attempt limits are advisory; [`SignInAttempts`] enforces them for callers

pub mod application;
pub mod domain;
pub mod error;


// Re-exports for convenience
pub use application::{AuthConfig, SignInAttempts, SignInOutcome};
pub use domain::{Authenticatable, Client, CorporateClient, IndividualClient};
pub use error::{AuthError, AuthResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
