//! Agent session store
//!
//! Agent authentication is the logical AND of two independent flags: the
//! local credential check against the backend and the presence of the
//! delegated third-party identity. Logout clears both.

use contracts::enums::UserRole;
use leptos::prelude::*;

use crate::domain::agents::api as agents_api;
use crate::shared::cache::QueryCache;
use crate::shared::client::ApiClient;
use crate::system::identity as identity_api;

use super::identity::DelegatedIdentity;
use super::{storage, AuthError};

/// Effective agent authentication from its two independent session flags
pub fn effective_authentication(local_flag: bool, identity_present: bool) -> bool {
    local_flag && identity_present
}

/// The delegated principal every caller-scoped RPC is keyed by; role
/// registration cannot proceed without it
pub fn registration_principal(principal: Option<String>) -> Result<String, AuthError> {
    principal.ok_or(AuthError::NotAvailable)
}

#[derive(Clone, Copy)]
pub struct AgentSession {
    authenticated: RwSignal<bool>,
    identity: DelegatedIdentity,
    cache: QueryCache,
}

impl AgentSession {
    pub fn provide(cache: QueryCache, identity: DelegatedIdentity) -> Self {
        let session = Self {
            authenticated: RwSignal::new(storage::agent_flag_set()),
            identity,
            cache,
        };
        provide_context(session);
        session
    }

    pub fn is_authenticated(&self) -> bool {
        effective_authentication(self.authenticated.get(), self.identity.is_present())
    }

    /// Delegate the credential check to the remote service
    ///
    /// A `false` result and a transport failure both leave the session
    /// unauthenticated; only an explicit `true` persists the flag.
    pub async fn login(
        &self,
        client: &ApiClient,
        mobile_number: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let accepted = agents_api::agent_login(client, mobile_number, password)
            .await
            .map_err(AuthError::Remote)?;
        if !accepted {
            return Err(AuthError::InvalidAgentCredentials);
        }
        // register the delegated identity under the agent-facing role
        let principal = registration_principal(self.identity.principal())?;
        identity_api::assign_caller_user_role(client, &principal, UserRole::User)
            .await
            .map_err(AuthError::Remote)?;
        storage::save_agent_flag();
        self.authenticated.set(true);
        Ok(())
    }

    /// Clears the local flag, the delegated identity and every cached read
    pub fn logout(&self) {
        storage::clear_agent_flag();
        self.authenticated.set(false);
        self.identity.clear();
        self.cache.clear_all();
    }
}

pub fn use_agent_session() -> AgentSession {
    use_context::<AgentSession>().expect("AgentSession not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_flags_are_required() {
        assert!(effective_authentication(true, true));
        assert!(!effective_authentication(true, false));
        assert!(!effective_authentication(false, true));
        assert!(!effective_authentication(false, false));
    }

    #[test]
    fn role_registration_requires_the_delegated_principal() {
        assert_eq!(
            registration_principal(None),
            Err(AuthError::NotAvailable)
        );
        assert_eq!(
            registration_principal(Some("aaaaa-bbbbb".to_string())),
            Ok("aaaaa-bbbbb".to_string())
        );
    }
}
