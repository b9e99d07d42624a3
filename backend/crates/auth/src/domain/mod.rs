//! Domain Layer
//!
//! Contains the authentication capability, client entities and value objects.

pub mod authenticatable;
pub mod entity;
pub mod value_object;

// Re-exports
pub use authenticatable::Authenticatable;
pub use entity::{client::Client, corporate_client::CorporateClient, individual_client::IndividualClient};
