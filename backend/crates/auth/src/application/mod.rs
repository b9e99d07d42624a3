//! Application Layer
//!
//! Use cases built on top of the client domain.

pub mod config;
pub mod sign_in;

pub use config::AuthConfig;
pub use sign_in::{SignInAttempts, SignInOutcome};
