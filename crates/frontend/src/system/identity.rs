//! Caller-scoped identity RPCs: role, admin check and profile
//!
//! These are keyed by the delegated identity the backend sees on the
//! request: the stored principal travels as the bearer credential, so every
//! hook defers until that principal is present.

use contracts::domain::UserProfile;
use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use crate::shared::cache::{use_query, use_query_cache, QueryCache, QueryState};
use crate::shared::client::{use_client, ApiClient, ClientContext};
use crate::shared::toast::{use_toasts, ToastService};

use super::auth::identity::{use_delegated_identity, DelegatedIdentity};

pub async fn get_caller_user_role(
    client: &ApiClient,
    principal: &str,
) -> Result<UserRole, String> {
    client.get("/api/identity/role", Some(principal)).await
}

pub async fn is_caller_admin(client: &ApiClient, principal: &str) -> Result<bool, String> {
    client.get("/api/identity/is-admin", Some(principal)).await
}

pub async fn get_caller_user_profile(
    client: &ApiClient,
    principal: &str,
) -> Result<Option<UserProfile>, String> {
    client.get("/api/identity/profile", Some(principal)).await
}

pub async fn save_caller_user_profile(
    client: &ApiClient,
    principal: &str,
    profile: &UserProfile,
) -> Result<(), String> {
    client
        .put_unit("/api/identity/profile", profile, Some(principal))
        .await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleAssignment {
    role: UserRole,
}

/// Register the caller under a role; idempotent on the backend
pub async fn assign_caller_user_role(
    client: &ApiClient,
    principal: &str,
    role: UserRole,
) -> Result<(), String> {
    client
        .post_unit(
            "/api/identity/assign-role",
            &RoleAssignment { role },
            Some(principal),
        )
        .await
}

pub fn use_caller_role() -> QueryState<UserRole> {
    let cache = use_query_cache();
    let client = use_client();
    let identity = use_delegated_identity();
    use_query(cache.identity, move || {
        let client = client.ready()?;
        let principal = identity.principal()?;
        Some(async move { get_caller_user_role(&client, &principal).await })
    })
}

pub fn use_caller_profile() -> QueryState<Option<UserProfile>> {
    let cache = use_query_cache();
    let client = use_client();
    let identity = use_delegated_identity();
    use_query(cache.identity, move || {
        let client = client.ready()?;
        let principal = identity.principal()?;
        Some(async move { get_caller_user_profile(&client, &principal).await })
    })
}

#[derive(Clone, Copy)]
pub struct ProfileMutations {
    cache: QueryCache,
    client: ClientContext,
    identity: DelegatedIdentity,
    toasts: ToastService,
}

pub fn use_profile_mutations() -> ProfileMutations {
    ProfileMutations {
        cache: use_query_cache(),
        client: use_client(),
        identity: use_delegated_identity(),
        toasts: use_toasts(),
    }
}

impl ProfileMutations {
    pub fn save(&self, profile: UserProfile) {
        let Some(client) = self.client.client.get_untracked() else {
            return;
        };
        let Some(principal) = self.identity.principal() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match save_caller_user_profile(&client, &principal, &profile).await {
                Ok(()) => {
                    this.cache.invalidate_identity();
                    this.toasts.success("Profile saved");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }
}
