use serde::{Deserialize, Serialize};

/// Field agent who takes orders over the alternate channel
///
/// The observed backend contract stores and transmits the password in
/// plaintext. That is preserved here as-is; it is a contract fact, not a
/// recommendation (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Identity principal assigned by the backend
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: String,
    /// Unique key for lookup, update and delete
    pub mobile_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInput {
    pub username: String,
    pub password: String,
    pub role: String,
    pub mobile_number: String,
}
