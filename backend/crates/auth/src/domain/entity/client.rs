//! Client Entity
//!
//! Closed set of client variants. Callers that handle both kinds of client
//! (sign-in, listings) work with this enum; the capability is delegated to
//! the wrapped variant.

use kernel::id::ClientId;
use platform::password::SecretPassword;

use crate::domain::authenticatable::Authenticatable;
use crate::domain::entity::{corporate_client::CorporateClient, individual_client::IndividualClient};

#[derive(Debug)]
pub enum Client {
    Individual(IndividualClient),
    Corporate(CorporateClient),
}

impl Client {
    pub fn id(&self) -> ClientId {
        match self {
            Client::Individual(c) => c.id(),
            Client::Corporate(c) => c.id(),
        }
    }

    /// Person name or legal name
    pub fn display_name(&self) -> &str {
        match self {
            Client::Individual(c) => c.name(),
            Client::Corporate(c) => c.legal_name(),
        }
    }

    pub fn national_id(&self) -> &str {
        match self {
            Client::Individual(c) => c.national_id(),
            Client::Corporate(c) => c.national_id(),
        }
    }

    pub fn is_corporate(&self) -> bool {
        matches!(self, Client::Corporate(_))
    }
}

impl Authenticatable for Client {
    fn stored_identifier(&self) -> &str {
        match self {
            Client::Individual(c) => c.stored_identifier(),
            Client::Corporate(c) => c.stored_identifier(),
        }
    }

    fn credential(&self) -> &SecretPassword {
        match self {
            Client::Individual(c) => c.credential(),
            Client::Corporate(c) => c.credential(),
        }
    }
}

impl From<IndividualClient> for Client {
    fn from(client: IndividualClient) -> Self {
        Client::Individual(client)
    }
}

impl From<CorporateClient> for Client {
    fn from(client: CorporateClient) -> Self {
        Client::Corporate(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegation() {
        let clients: Vec<Client> = vec![
            IndividualClient::new(1, "João da Silva", "123.456.789-09", "Senh@Segura123")
                .unwrap()
                .into(),
            CorporateClient::new(2, "Tech Solutions Ltda", "11.222.333/0001-81", "Empres@Segura456")
                .unwrap()
                .into(),
        ];

        assert_eq!(clients[0].display_name(), "João da Silva");
        assert!(!clients[0].is_corporate());
        assert!(clients[0].authenticate("12345678909", "Senh@Segura123"));

        assert_eq!(clients[1].display_name(), "Tech Solutions Ltda");
        assert_eq!(clients[1].id().get(), 2);
        assert_eq!(clients[1].national_id(), "11.222.333/0001-81");
        assert!(clients[1].is_corporate());
        assert!(clients[1].authenticate("11222333000181", "Empres@Segura456"));
        assert!(!clients[1].authenticate("12345678909", "Empres@Segura456"));

        for client in &clients {
            assert_eq!(client.max_attempts(), 3);
        }
    }
}
