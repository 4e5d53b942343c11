//! Admin landing: links into each management area and the caller's role as
//! the backend sees it

use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::i18n::use_i18n;
use crate::system::auth::admin::use_admin_session;
use crate::system::identity::use_caller_role;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let i18n = use_i18n();
    let session = use_admin_session();
    let role = use_caller_role();

    view! {
        <section class="admin-dashboard">
            <h1>{move || i18n.t("admin.dashboard")}</h1>
            <p>{move || i18n.t("admin.welcome")}</p>
            {move || {
                role.data
                    .get()
                    .map(|role| view! { <p class="caller-role">"Role: " {role.label()}</p> })
            }}

            <nav class="admin-links">
                <A href="/admin/products">{move || i18n.t("admin.products")}</A>
                <A href="/admin/orders">{move || i18n.t("admin.orders")}</A>
                <A href="/admin/agents">{move || i18n.t("admin.agents")}</A>
                <A href="/admin/edit-text">{move || i18n.t("admin.content")}</A>
                <A href="/admin/reference-website">{move || i18n.t("admin.reference")}</A>
            </nav>

            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| session.logout()
            >
                {move || i18n.t("admin.logout")}
            </Button>
        </section>
    }
}
