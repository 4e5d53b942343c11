//! Application chrome: header navigation, language switcher and footer

use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::i18n::{use_i18n, Language};
use crate::system::auth::admin::use_admin_session;
use crate::system::auth::agent::use_agent_session;
use crate::system::auth::login_modal::{AdminLoginModal, AgentLoginModal};

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let i18n = use_i18n();
    let admin = use_admin_session();
    let agent = use_agent_session();

    let admin_login_open = RwSignal::new(false);
    let agent_login_open = RwSignal::new(false);

    view! {
        <div class="app-shell">
            <header class="app-header">
                <div class="app-brand">
                    <A href="/">{move || i18n.t("app.title")}</A>
                </div>
                <nav class="app-nav">
                    <A href="/">{move || i18n.t("nav.home")}</A>
                    <A href="/products">{move || i18n.t("nav.products")}</A>
                    <A href="/contact">{move || i18n.t("nav.contact")}</A>
                    <Show when=move || admin.is_authenticated()>
                        <A href="/admin">{move || i18n.t("nav.admin")}</A>
                    </Show>
                    <Show when=move || agent.is_authenticated()>
                        <A href="/agent/orders">{move || i18n.t("agent.orders")}</A>
                    </Show>
                </nav>
                <div class="app-header-controls">
                    <LanguageSwitcher />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| agent_login_open.set(true)
                    >
                        {move || {
                            if agent.is_authenticated() {
                                i18n.t("agent.logout")
                            } else {
                                i18n.t("agent.login")
                            }
                        }}
                    </Button>
                </div>
            </header>

            <main class="app-main">{children()}</main>

            <footer class="app-footer">
                <p>{crate::shared::contact::SHOP_NAME}</p>
                <button class="footer-admin-link" on:click=move |_| admin_login_open.set(true)>
                    {move || i18n.t("footer.admin")}
                </button>
            </footer>

            <AdminLoginModal open=admin_login_open />
            <AgentLoginModal open=agent_login_open />
        </div>
    }
}

/// Compact switcher cycling through every supported language
#[component]
fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    let open = RwSignal::new(false);

    view! {
        <div class="language-switcher">
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| open.update(|v| *v = !*v)
            >
                {move || i18n.language().native_name()}
            </Button>
            <Show when=move || open.get()>
                <div class="language-switcher-menu">
                    {Language::all()
                        .into_iter()
                        .map(|language| {
                            view! {
                                <button
                                    class="language-switcher-item"
                                    on:click=move |_| {
                                        i18n.set_language(language);
                                        open.set(false);
                                    }
                                >
                                    {language.native_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
