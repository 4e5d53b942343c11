//! Orders visible to the logged-in field agent, plus their profile card

use contracts::domain::UserProfile;
use leptos::prelude::*;
use thaw::*;

use crate::domain::orders::hooks::use_agent_orders;
use crate::i18n::use_i18n;
use crate::shared::components::{ErrorState, LoadingState};
use crate::system::identity::{use_caller_profile, use_profile_mutations};

#[component]
pub fn AgentOrdersPage() -> impl IntoView {
    let i18n = use_i18n();
    let orders = use_agent_orders();

    view! {
        <section class="agent-orders">
            <h1>{move || i18n.t("agent.orders")}</h1>

            <ProfileCard />

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
                                        .map(|order| {
                                            view! {
                                                <div class="order-row">
                                                    <h3>{order.product_summary.clone()}</h3>
                                                    <p>
                                                        {order.customer_name.clone()} " · "
                                                        {order.customer_mobile.clone()}
                                                    </p>
                                                    <p class="order-total">
                                                        {format!("₹{}", order.total_amount)}
                                                    </p>
                                                    <span class="order-status">
                                                        {order.status.label()}
                                                    </span>
                                                </div>
                                            }
                                        })
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

/// Display name the backend keeps for this identity, editable inline
#[component]
fn ProfileCard() -> impl IntoView {
    let profile = use_caller_profile();
    let mutations = use_profile_mutations();
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(Some(stored)) = profile.data.get() {
            name.set(stored.name);
        }
    });

    let save = move |_| {
        let value = name.get_untracked();
        if value.is_empty() {
            return;
        }
        mutations.save(UserProfile { name: value });
    };

    view! {
        <div class="profile-card">
            <div class="form-field">
                <label>"Display name"</label>
                <Input value=name />
            </div>
            <Button appearance=ButtonAppearance::Secondary on_click=save>
                {move || i18n.t("save")}
            </Button>
        </div>
    }
}
