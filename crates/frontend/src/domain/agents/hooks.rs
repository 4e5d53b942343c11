use contracts::domain::{Agent, AgentInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::cache::{use_query, use_query_cache, QueryCache, QueryState};
use crate::shared::client::{use_client, ClientContext};
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::admin::{use_admin_session, AdminSession};

use super::api;

/// Admin-only agent roster; quietly empty until the session is in place
pub fn use_agents() -> QueryState<Vec<Agent>> {
    let cache = use_query_cache();
    let client = use_client();
    let session = use_admin_session();
    use_query(cache.agents, move || {
        let client = client.ready()?;
        let token = session.token()?;
        Some(async move { api::get_all_agents(&client, &token).await })
    })
}

/// Agent mutations bound to the contexts active at the call site
#[derive(Clone, Copy)]
pub struct AgentMutations {
    cache: QueryCache,
    client: ClientContext,
    session: AdminSession,
    toasts: ToastService,
}

pub fn use_agent_mutations() -> AgentMutations {
    AgentMutations {
        cache: use_query_cache(),
        client: use_client(),
        session: use_admin_session(),
        toasts: use_toasts(),
    }
}

impl AgentMutations {
    fn authorized(&self) -> Option<(crate::shared::client::ApiClient, String)> {
        let client = self.client.client.get_untracked()?;
        let token = self.session.token()?;
        Some((client, token))
    }

    pub fn save(&self, input: AgentInput, is_new: bool) {
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = if is_new {
                api::create_agent(&client, &input, &token).await
            } else {
                api::update_agent(&client, &input, &token).await
            };
            match result {
                Ok(()) => {
                    this.cache.invalidate_agents();
                    this.toasts.success("Agent saved");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }

    pub fn delete(&self, mobile_number: String) {
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::delete_agent(&client, &mobile_number, &token).await {
                Ok(()) => {
                    this.cache.invalidate_agents();
                    this.toasts.success("Agent deleted");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }
}
