//! Delegated third-party identity
//!
//! The identity provider itself is an external collaborator; this client
//! only runs its delegation exchange and records the principal it hands
//! back. Agent authentication requires this principal to be present in
//! addition to the agent's own credential check.

use leptos::prelude::*;
use serde::Deserialize;

use crate::shared::client::ApiClient;

use super::{storage, AuthError};

#[derive(Debug, Deserialize)]
struct DelegationResponse {
    principal: String,
}

#[derive(Clone, Copy)]
pub struct DelegatedIdentity {
    principal: RwSignal<Option<String>>,
}

impl DelegatedIdentity {
    pub fn provide() -> Self {
        let identity = Self {
            principal: RwSignal::new(storage::get_delegated_identity()),
        };
        provide_context(identity);
        identity
    }

    pub fn principal(&self) -> Option<String> {
        self.principal.get()
    }

    pub fn is_present(&self) -> bool {
        self.principal.get().is_some()
    }

    /// Run the provider's delegation exchange and persist the principal
    pub async fn login(&self, client: &ApiClient) -> Result<String, AuthError> {
        let response: DelegationResponse = client
            .post("/api/identity/delegate", &(), None)
            .await
            .map_err(AuthError::Remote)?;
        storage::save_delegated_identity(&response.principal);
        self.principal.set(Some(response.principal.clone()));
        Ok(response.principal)
    }

    pub fn clear(&self) {
        storage::clear_delegated_identity();
        self.principal.set(None);
    }
}

pub fn use_delegated_identity() -> DelegatedIdentity {
    use_context::<DelegatedIdentity>().expect("DelegatedIdentity not provided in context")
}
