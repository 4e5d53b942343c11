//! Customer order RPCs

use contracts::domain::{CustomerOrder, CustomerOrderInput};
use contracts::enums::OrderStatus;
use serde::Serialize;

use crate::shared::client::ApiClient;

/// Place an order; `None` means the backend rejected it (out of stock,
/// unknown product) without a transport failure
pub async fn create_customer_order(
    client: &ApiClient,
    input: &CustomerOrderInput,
) -> Result<Option<CustomerOrder>, String> {
    client.post("/api/orders", input, None).await
}

pub async fn get_orders_by_status(
    client: &ApiClient,
    status: OrderStatus,
    token: &str,
) -> Result<Vec<CustomerOrder>, String> {
    client
        .get(&format!("/api/orders?status={}", status.code()), Some(token))
        .await
}

pub async fn get_customer_order(client: &ApiClient, id: &str) -> Result<CustomerOrder, String> {
    client.get(&format!("/api/orders/{}", id), None).await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdate {
    status: OrderStatus,
}

pub async fn update_order_status(
    client: &ApiClient,
    id: &str,
    status: OrderStatus,
    token: &str,
) -> Result<(), String> {
    client
        .put_unit(
            &format!("/api/orders/{}/status", id),
            &StatusUpdate { status },
            Some(token),
        )
        .await
}

/// Orders visible to the calling agent; the delegated principal is the
/// bearer credential the backend scopes the read by
pub async fn get_agent_orders(
    client: &ApiClient,
    principal: &str,
) -> Result<Vec<CustomerOrder>, String> {
    client.get("/api/orders/agent", Some(principal)).await
}
