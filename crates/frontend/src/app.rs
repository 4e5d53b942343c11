//! Application root: context wiring and the router

use leptos::prelude::*;

use crate::i18n::{LanguageSelectModal, I18n};
use crate::routes::AppRouter;
use crate::shared::cache::QueryCache;
use crate::shared::client::ClientContext;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::admin::AdminSession;
use crate::system::auth::agent::AgentSession;
use crate::system::auth::identity::DelegatedIdentity;

#[component]
pub fn App() -> impl IntoView {
    // context order matters: sessions depend on the cache and identity
    let _i18n = I18n::provide();
    let cache = QueryCache::provide();
    ClientContext::provide();
    ToastService::provide();
    let identity = DelegatedIdentity::provide();
    AdminSession::provide(cache);
    AgentSession::provide(cache, identity);

    view! {
        <LanguageSelectModal />
        <AppRouter />
        <Toaster />
    }
}
