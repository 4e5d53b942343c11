//! Admin session store
//!
//! SECURITY: the expected credentials and the session token are literals
//! embedded in client-delivered code, exactly as the backend contract
//! observes them. A motivated client-side attacker can read them; this is a
//! placeholder pending a backend-issued session, not an access-control
//! boundary. Do not treat it as one (see DESIGN.md).

use leptos::prelude::*;

use crate::shared::cache::QueryCache;

use super::{storage, AuthError};

const ADMIN_USERNAME: &str = "ABYSSSHAVEZ";
const ADMIN_PASSWORD: &str = "S2182007n4299781@";
const ADMIN_SESSION_TOKEN: &str = "QOCb5ncoyBmax3denemyuw3phcymdpFE";

/// Credential check against the fixed expected pair
pub fn check_credentials(username: &str, password: &str) -> Result<&'static str, AuthError> {
    if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(ADMIN_SESSION_TOKEN)
}

/// Client-held admin session
///
/// Initialized from persisted storage at startup; mutated only through
/// `login`/`logout`, which notify subscribers through the token signal.
#[derive(Clone, Copy)]
pub struct AdminSession {
    token: RwSignal<Option<String>>,
    cache: QueryCache,
}

impl AdminSession {
    pub fn provide(cache: QueryCache) -> Self {
        let session = Self {
            token: RwSignal::new(storage::get_admin_token()),
            cache,
        };
        provide_context(session);
        session
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// Validate credentials, persist the session token, refresh admin reads
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let token = check_credentials(username, password)?;
        storage::save_admin_token(token);
        self.token.set(Some(token.to_string()));
        self.cache.invalidate_admin_scopes();
        Ok(())
    }

    /// Always succeeds; clears storage, state and every cached read
    pub fn logout(&self) {
        storage::clear_admin_token();
        self.token.set(None);
        self.cache.clear_all();
    }
}

pub fn use_admin_session() -> AdminSession {
    use_context::<AdminSession>().expect("AdminSession not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pair_succeeds_with_the_persisted_token() {
        let token = check_credentials(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
        assert_eq!(token, ADMIN_SESSION_TOKEN);
    }

    #[test]
    fn any_other_pair_fails() {
        assert_eq!(
            check_credentials("admin", "admin"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            check_credentials(ADMIN_USERNAME, "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            check_credentials("", ""),
            Err(AuthError::InvalidCredentials)
        );
    }
}
