//! Corporate Client Entity
//!
//! A legal entity identified by a corporate taxpayer identifier.
//! Construction requires the punctuated `NN.NNN.NNN/NNNN-NN` form, while
//! [`authenticate`](Authenticatable::authenticate) accepts any formatting.

use kernel::id::ClientId;
use platform::password::SecretPassword;

use crate::domain::authenticatable::Authenticatable;
use crate::domain::value_object::{client_name::ClientName, corporate_tax_id::CorporateTaxId};
use crate::error::{AuthError, AuthResult};

#[derive(Debug)]
pub struct CorporateClient {
    id: ClientId,
    legal_name: ClientName,
    tax_id: CorporateTaxId,
    password: SecretPassword,
}

impl CorporateClient {
    /// Create a new corporate client
    ///
    /// ## Errors
    /// - [`AuthError::NonPositiveId`] when `id <= 0`
    /// - [`AuthError::BlankLegalName`] when `legal_name` is blank
    /// - [`AuthError::UnformattedCorporateTaxId`] when `national_id` is not
    ///   punctuated exactly as `NN.NNN.NNN/NNNN-NN`
    /// - [`AuthError::InvalidCorporateTaxId`] when check digits fail
    pub fn new(
        id: i64,
        legal_name: impl Into<String>,
        national_id: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<Self> {
        Self::build(id, legal_name.into(), national_id.into(), password.into())
            .inspect_err(AuthError::log)
    }

    fn build(
        id: i64,
        legal_name: String,
        national_id: String,
        password: String,
    ) -> AuthResult<Self> {
        let id = ClientId::from_raw(id).ok_or(AuthError::NonPositiveId(id))?;
        let legal_name = ClientName::new(legal_name).map_err(|_| AuthError::BlankLegalName)?;
        let tax_id = CorporateTaxId::new(national_id)?;

        tracing::debug!(client_id = %id, "Corporate client created");
        Ok(Self {
            id,
            legal_name,
            tax_id,
            password: SecretPassword::new(password),
        })
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn legal_name(&self) -> &str {
        self.legal_name.as_str()
    }

    pub fn national_id(&self) -> &str {
        self.tax_id.as_str()
    }

    pub fn tax_id(&self) -> &CorporateTaxId {
        &self.tax_id
    }
}

impl Authenticatable for CorporateClient {
    fn stored_identifier(&self) -> &str {
        self.tax_id.as_str()
    }

    fn credential(&self) -> &SecretPassword {
        &self.password
    }
}
