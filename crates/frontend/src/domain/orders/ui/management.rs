//! Admin order board: the merged status lists with per-order transitions

use contracts::domain::CustomerOrder;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use thaw::*;

use crate::domain::orders::hooks::{use_all_orders, use_order_mutations, OrderMutations};
use crate::i18n::use_i18n;
use crate::shared::components::{ErrorState, LoadingState};

#[component]
pub fn OrderManagementPage() -> impl IntoView {
    let i18n = use_i18n();
    let orders = use_all_orders();
    let mutations = use_order_mutations();

    view! {
        <section class="order-management">
            <h1>{move || i18n.t("admin.orders")}</h1>

            <Show when=move || orders.loading.get()>
                <LoadingState />
            </Show>

            {move || {
                orders
                    .error
                    .get()
                    .map(|message| {
                        view! {
                            <ErrorState
                                message=message
                                on_retry=Callback::new(move |()| orders.refetch())
                            />
                        }
                    })
            }}

            {move || {
                orders
                    .data
                    .get()
                    .map(|items| {
                        if items.is_empty() {
                            view! { <p class="empty-state">"No orders yet"</p> }.into_any()
                        } else {
                            view! {
                                <div class="order-list">
                                    {items
                                        .into_iter()
                                        .map(|order| view! { <OrderRow order mutations /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn OrderRow(order: CustomerOrder, mutations: OrderMutations) -> impl IntoView {
    let current = order.status;
    let id = order.id.clone();

    view! {
        <div class="order-row">
            <div class="order-row-summary">
                <h3>{order.product_summary.clone()}</h3>
                <p>{order.customer_name.clone()} " · " {order.customer_mobile.clone()}</p>
                <p>{order.customer_address.clone()}</p>
                <p class="order-total">{format!("₹{}", order.total_amount)}</p>
                <span class="order-status">{current.label()}</span>
            </div>
            <div class="order-row-actions">
                {OrderStatus::all()
                    .into_iter()
                    .filter(|status| *status != current)
                    .map(|status| {
                        let id = id.clone();
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                size=ButtonSize::Small
                                on_click=move |_| mutations.set_status(id.clone(), status)
                            >
                                {status.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
