//! Entity Module

pub mod client;
pub mod corporate_client;
pub mod individual_client;
