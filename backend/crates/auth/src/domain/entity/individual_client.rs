//! Individual Client Entity
//!
//! A natural person identified by an individual taxpayer identifier.

use kernel::id::ClientId;
use platform::password::SecretPassword;

use crate::domain::authenticatable::Authenticatable;
use crate::domain::value_object::{client_name::ClientName, individual_tax_id::IndividualTaxId};
use crate::error::{AuthError, AuthResult};

/// Individual client
///
/// Immutable once built. The password has no accessor.
#[derive(Debug)]
pub struct IndividualClient {
    id: ClientId,
    name: ClientName,
    tax_id: IndividualTaxId,
    password: SecretPassword,
}

impl IndividualClient {
    /// Create a new individual client
    ///
    /// ## Errors
    /// - [`AuthError::NonPositiveId`] when `id <= 0`
    /// - [`AuthError::BlankName`] when `name` is blank
    /// - [`AuthError::InvalidIndividualTaxId`] when `national_id` fails
    ///   length or check-digit validation (punctuation is optional)
    pub fn new(
        id: i64,
        name: impl Into<String>,
        national_id: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<Self> {
        Self::build(id, name.into(), national_id.into(), password.into())
            .inspect_err(AuthError::log)
    }

    fn build(id: i64, name: String, national_id: String, password: String) -> AuthResult<Self> {
        let id = ClientId::from_raw(id).ok_or(AuthError::NonPositiveId(id))?;
        let name = ClientName::new(name)?;
        let tax_id = IndividualTaxId::new(national_id)?;

        tracing::debug!(client_id = %id, "Individual client created");
        Ok(Self {
            id,
            name,
            tax_id,
            password: SecretPassword::new(password),
        })
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Identifier exactly as given at construction
    pub fn national_id(&self) -> &str {
        self.tax_id.as_str()
    }

    pub fn tax_id(&self) -> &IndividualTaxId {
        &self.tax_id
    }
}

impl Authenticatable for IndividualClient {
    fn stored_identifier(&self) -> &str {
        self.tax_id.as_str()
    }

    fn credential(&self) -> &SecretPassword {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joao() -> IndividualClient {
        IndividualClient::new(1, "João Silva", "123.456.789-09", "Senha@Forte123").unwrap()
    }

    #[test]
    fn test_create_valid() {
        let client = joao();
        assert_eq!(client.id().get(), 1);
        assert_eq!(client.name(), "João Silva");
        assert_eq!(client.national_id(), "123.456.789-09");
        assert_eq!(client.tax_id().digits(), "12345678909");
    }

    #[test]
    fn test_create_with_unformatted_identifier() {
        let client = IndividualClient::new(2, "Maria Santos", "98765432100", "OutraSenha@456").unwrap();
        assert_eq!(client.id().get(), 2);
        assert_eq!(client.national_id(), "98765432100");
    }

    #[test]
    fn test_reject_non_positive_id() {
        let err = IndividualClient::new(0, "João Silva", "123.456.789-09", "Senha@Forte123")
            .unwrap_err();
        assert_eq!(err, AuthError::NonPositiveId(0));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_reject_blank_name() {
        let err = IndividualClient::new(1, "", "123.456.789-09", "Senha@Forte123").unwrap_err();
        assert_eq!(err, AuthError::BlankName);
    }

    #[test]
    fn test_reject_invalid_identifier() {
        for bad in ["123.456.789-00", "111.111.111-11", "1234567890", ""] {
            let err = IndividualClient::new(1, "João Silva", bad, "Senha@Forte123").unwrap_err();
            assert_eq!(err, AuthError::InvalidIndividualTaxId, "accepted {bad}");
        }
    }

    #[test]
    fn test_first_failed_invariant_is_reported() {
        let err = IndividualClient::new(-5, "", "bad", "x").unwrap_err();
        assert_eq!(err, AuthError::NonPositiveId(-5));
    }

    #[test]
    fn test_authenticate() {
        let client = joao();
        assert!(client.authenticate("123.456.789-09", "Senha@Forte123"));
        assert!(client.authenticate("12345678909", "Senha@Forte123"));
        assert!(!client.authenticate("987.654.321-00", "Senha@Forte123"));
        assert!(!client.authenticate("123.456.789-09", "SenhaErrada@456"));
        assert!(!client.authenticate("123.456.789-09", "senha123"));
        assert!(!client.authenticate("123.456.789-09", "Sen@1Ab"));
    }

    #[test]
    fn test_max_attempts() {
        assert_eq!(joao().max_attempts(), 3);
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", joao());
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Forte123"));
    }
}
