pub mod admin;
pub mod agent;
pub mod guard;
pub mod identity;
pub mod login_modal;
pub mod storage;

use thiserror::Error;

/// Failures of the login operations; surfaced inline near the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Invalid mobile number or password")]
    InvalidAgentCredentials,
    #[error("Remote service not available")]
    NotAvailable,
    #[error("{0}")]
    Remote(String),
}
