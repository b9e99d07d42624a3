//! Value Object Module

pub mod client_name;
pub mod corporate_tax_id;
pub mod individual_tax_id;
