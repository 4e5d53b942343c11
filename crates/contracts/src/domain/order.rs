use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

/// Customer order with denormalized contact and product fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub id: String,
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_address: String,
    pub product_id: String,
    pub product_name: String,
    pub product_summary: String,
    pub quantity: u64,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for placing an order from the checkout form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderInput {
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_address: String,
    pub product_id: String,
    pub quantity: u64,
}

/// Order total in minor currency units: unit price times quantity
pub fn compute_total(price: u64, quantity: u64) -> u64 {
    price.saturating_mul(quantity)
}

/// Union of per-status query results for the "all orders" view
///
/// The three status queries run concurrently; the merged result must not
/// depend on which response arrives first, so batches are concatenated in
/// the fixed order they were requested in.
pub fn merge_status_batches(batches: Vec<Vec<CustomerOrder>>) -> Vec<CustomerOrder> {
    batches.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: OrderStatus) -> CustomerOrder {
        CustomerOrder {
            id: id.into(),
            customer_name: "Ravi".into(),
            customer_mobile: "9876543210".into(),
            customer_address: "12 MG Road, Bijnor, UP - 246701".into(),
            product_id: "p-1".into(),
            product_name: "Wheat Seeds".into(),
            product_summary: "Wheat Seeds x 5".into(),
            quantity: 5,
            total_amount: 500,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn total_is_price_times_quantity() {
        assert_eq!(compute_total(100, 5), 500);
        assert_eq!(compute_total(0, 10), 0);
    }

    #[test]
    fn merge_is_union_of_batches() {
        let pending = vec![order("P1", OrderStatus::Pending)];
        let confirmed = vec![order("C1", OrderStatus::Confirmed)];
        let completed: Vec<CustomerOrder> = vec![];
        let merged = merge_status_batches(vec![pending, confirmed, completed]);
        let ids: Vec<&str> = merged.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "C1"]);
    }
}
