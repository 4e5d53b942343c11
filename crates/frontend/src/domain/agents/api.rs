//! Agent RPCs; agents are keyed by mobile number

use contracts::domain::{Agent, AgentInput};
use serde::Serialize;

use crate::shared::client::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    mobile_number: &'a str,
    password: &'a str,
}

/// Boolean credential check; `false` means the pair was rejected
pub async fn agent_login(
    client: &ApiClient,
    mobile_number: &str,
    password: &str,
) -> Result<bool, String> {
    client
        .post(
            "/api/agents/login",
            &LoginRequest {
                mobile_number,
                password,
            },
            None,
        )
        .await
}

pub async fn get_all_agents(client: &ApiClient, token: &str) -> Result<Vec<Agent>, String> {
    client.get("/api/agents", Some(token)).await
}

pub async fn get_agent(
    client: &ApiClient,
    mobile_number: &str,
    token: &str,
) -> Result<Agent, String> {
    client
        .get(&format!("/api/agents/{}", mobile_number), Some(token))
        .await
}

pub async fn create_agent(
    client: &ApiClient,
    input: &AgentInput,
    token: &str,
) -> Result<(), String> {
    client.post_unit("/api/agents", input, Some(token)).await
}

pub async fn update_agent(
    client: &ApiClient,
    input: &AgentInput,
    token: &str,
) -> Result<(), String> {
    client
        .put_unit(
            &format!("/api/agents/{}", input.mobile_number),
            input,
            Some(token),
        )
        .await
}

pub async fn delete_agent(
    client: &ApiClient,
    mobile_number: &str,
    token: &str,
) -> Result<(), String> {
    client
        .delete_unit(&format!("/api/agents/{}", mobile_number), Some(token))
        .await
}
