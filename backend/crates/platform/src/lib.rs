//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the rule engines shared by the client domain:
//! - Digit normalization of formatted identifiers
//! - Check-digit validation of individual and corporate taxpayer identifiers
//! - Password strength policy and secret password storage
//! - Constant-time comparison

pub mod check_digit;
pub mod crypto;
pub mod digits;
pub mod password;
