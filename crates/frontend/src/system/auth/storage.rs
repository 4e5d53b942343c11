//! Persisted session state keys

use crate::shared::storage;

const ADMIN_TOKEN_KEY: &str = "admin-session-token";
const AGENT_SESSION_KEY: &str = "agent-session-authenticated";
const DELEGATED_IDENTITY_KEY: &str = "agent-delegated-identity";

pub fn get_admin_token() -> Option<String> {
    storage::get(ADMIN_TOKEN_KEY)
}

pub fn save_admin_token(token: &str) {
    storage::set(ADMIN_TOKEN_KEY, token);
}

pub fn clear_admin_token() {
    storage::remove(ADMIN_TOKEN_KEY);
}

pub fn agent_flag_set() -> bool {
    storage::get(AGENT_SESSION_KEY).as_deref() == Some("true")
}

pub fn save_agent_flag() {
    storage::set(AGENT_SESSION_KEY, "true");
}

pub fn clear_agent_flag() {
    storage::remove(AGENT_SESSION_KEY);
}

pub fn get_delegated_identity() -> Option<String> {
    storage::get(DELEGATED_IDENTITY_KEY)
}

pub fn save_delegated_identity(principal: &str) {
    storage::set(DELEGATED_IDENTITY_KEY, principal);
}

pub fn clear_delegated_identity() {
    storage::remove(DELEGATED_IDENTITY_KEY);
}
