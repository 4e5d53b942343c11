use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::i18n::use_i18n;

use super::admin::use_admin_session;
use super::agent::use_agent_session;
use super::login_modal::{AdminLoginModal, AgentLoginModal};

/// Renders children only for an authenticated admin session.
///
/// The denial view flips to the protected content reactively as soon as a
/// login through the embedded modal succeeds.
#[component]
pub fn AdminRouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_admin_session();
    let i18n = use_i18n();
    let login_open = RwSignal::new(false);

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                view! {
                    <div class="guard-denied">
                        <h2>{move || i18n.t("admin.accessDenied")}</h2>
                        <p>{move || i18n.t("admin.accessDeniedDescription")}</p>
                        <div class="guard-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| login_open.set(true)
                            >
                                {move || i18n.t("admin.adminLoginButton")}
                            </Button>
                            <A href="/">{move || i18n.t("admin.goHome")}</A>
                        </div>
                        <AdminLoginModal open=login_open />
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Same shape as [`AdminRouteGuard`] for agent-only routes.
#[component]
pub fn AgentRouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_agent_session();
    let i18n = use_i18n();
    let login_open = RwSignal::new(false);

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                view! {
                    <div class="guard-denied">
                        <h2>{move || i18n.t("agent.accessDenied")}</h2>
                        <p>{move || i18n.t("agent.accessDeniedDesc")}</p>
                        <div class="guard-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| login_open.set(true)
                            >
                                {move || i18n.t("agent.login")}
                            </Button>
                            <A href="/">{move || i18n.t("admin.goHome")}</A>
                        </div>
                        <AgentLoginModal open=login_open />
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
