//! Handle to the remote RPC service
//!
//! One shared anonymous client is constructed per session and cached in
//! context; scoped operations pass their bearer credential explicitly, either
//! the admin session token or the caller's delegated principal. Construction
//! is asynchronous, so the context exposes an
//! `is_fetching` flag and dependent reads defer until the handle is ready.

use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_base;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// Bind a handle to the remote RPC surface
    pub async fn connect() -> Result<Self, String> {
        let base = api_base();
        if base.is_empty() {
            return Err("No window location to derive the API base from".to_string());
        }
        Ok(Self { base })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, String> {
        let mut builder = Request::get(&self.url(path));
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let response = builder
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, String> {
        let mut builder = Request::post(&self.url(path));
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let response = builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        decode(response).await
    }

    /// POST for RPCs that return no payload
    pub async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), String> {
        let mut builder = Request::post(&self.url(path));
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let response = builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        check(response).await
    }

    pub async fn put_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), String> {
        let mut builder = Request::put(&self.url(path));
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let response = builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        check(response).await
    }

    pub async fn delete_unit(&self, path: &str, token: Option<&str>) -> Result<(), String> {
        let mut builder = Request::delete(&self.url(path));
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let response = builder
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        check(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn check(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Surface the backend's own message verbatim when it sends one
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    format!("Request failed: {}", status)
}

/// Cached client handle plus its "still constructing" flag
#[derive(Clone, Copy)]
pub struct ClientContext {
    pub client: RwSignal<Option<ApiClient>>,
    pub is_fetching: RwSignal<bool>,
}

impl ClientContext {
    pub fn provide() -> Self {
        let ctx = Self {
            client: RwSignal::new(None),
            is_fetching: RwSignal::new(true),
        };
        spawn_local(async move {
            match ApiClient::connect().await {
                Ok(client) => ctx.client.set(Some(client)),
                Err(message) => log::error!("Failed to construct API client: {}", message),
            }
            ctx.is_fetching.set(false);
        });
        provide_context(ctx);
        ctx
    }

    /// The handle, once construction has settled; reads defer on `None`
    pub fn ready(&self) -> Option<ApiClient> {
        if self.is_fetching.get() {
            return None;
        }
        self.client.get()
    }
}

pub fn use_client() -> ClientContext {
    use_context::<ClientContext>().expect("ClientContext not provided in context")
}
