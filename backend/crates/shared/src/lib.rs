//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of banking vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers for domain entities
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across client and account domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
