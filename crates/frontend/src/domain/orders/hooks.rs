use contracts::domain::{merge_status_batches, CustomerOrder, CustomerOrderInput};
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::cache::{use_query, use_query_cache, QueryCache, QueryState};
use crate::shared::client::{use_client, ClientContext};
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::admin::{use_admin_session, AdminSession};
use crate::system::auth::agent::use_agent_session;
use crate::system::auth::identity::use_delegated_identity;

use super::api;

/// Admin order board: the three visible statuses fetched concurrently and
/// merged into one list
pub fn use_all_orders() -> QueryState<Vec<CustomerOrder>> {
    let cache = use_query_cache();
    let client = use_client();
    let session = use_admin_session();
    use_query(cache.orders, move || {
        let client = client.ready()?;
        let token = session.token()?;
        Some(async move {
            let (pending, confirmed, completed) = futures::join!(
                api::get_orders_by_status(&client, OrderStatus::Pending, &token),
                api::get_orders_by_status(&client, OrderStatus::Confirmed, &token),
                api::get_orders_by_status(&client, OrderStatus::Completed, &token),
            );
            Ok(merge_status_batches(vec![pending?, confirmed?, completed?]))
        })
    })
}

/// Orders scoped to the logged-in agent
pub fn use_agent_orders() -> QueryState<Vec<CustomerOrder>> {
    let cache = use_query_cache();
    let client = use_client();
    let session = use_agent_session();
    let identity = use_delegated_identity();
    use_query(cache.agent_orders, move || {
        if !session.is_authenticated() {
            return None;
        }
        let client = client.ready()?;
        let principal = identity.principal()?;
        Some(async move { api::get_agent_orders(&client, &principal).await })
    })
}

#[derive(Clone, Copy)]
pub struct OrderMutations {
    cache: QueryCache,
    client: ClientContext,
    session: AdminSession,
    toasts: ToastService,
}

pub fn use_order_mutations() -> OrderMutations {
    OrderMutations {
        cache: use_query_cache(),
        client: use_client(),
        session: use_admin_session(),
        toasts: use_toasts(),
    }
}

impl OrderMutations {
    pub fn set_status(&self, id: String, status: OrderStatus) {
        let Some(client) = self.client.client.get_untracked() else {
            return;
        };
        let Some(token) = self.session.token() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::update_order_status(&client, &id, status, &token).await {
                Ok(()) => {
                    this.cache.invalidate_orders();
                    this.toasts.success(format!("Order marked {}", status.label()));
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }
}

/// Checkout submission; success and rejection are both surfaced to the
/// caller so the form can navigate or stay put
pub async fn place_order(
    client: &ClientContext,
    toasts: &ToastService,
    input: CustomerOrderInput,
) -> Option<CustomerOrder> {
    let client = client.client.get_untracked()?;
    match api::create_customer_order(&client, &input).await {
        Ok(Some(order)) => Some(order),
        Ok(None) => {
            toasts.error("Order was rejected, please try again");
            None
        }
        Err(message) => {
            toasts.error(message);
            None
        }
    }
}
