use contracts::domain::{AboutUsContent, LandingPageTranslations, ReferenceWebsite};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::use_i18n;
use crate::shared::cache::{use_query, use_query_cache, QueryCache, QueryState};
use crate::shared::client::{use_client, ClientContext};
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::admin::{use_admin_session, AdminSession};

use super::api;

pub fn use_landing_translations() -> QueryState<LandingPageTranslations> {
    let cache = use_query_cache();
    let client = use_client();
    let i18n = use_i18n();
    use_query(cache.landing, move || {
        let client = client.ready()?;
        let language = i18n.code();
        Some(async move { api::get_landing_page_translations(&client, language).await })
    })
}

pub fn use_about_us() -> QueryState<AboutUsContent> {
    let cache = use_query_cache();
    let client = use_client();
    let i18n = use_i18n();
    use_query(cache.about_us, move || {
        let client = client.ready()?;
        let language = i18n.code();
        Some(async move { api::get_about_us(&client, language).await })
    })
}

/// Admin-only; quietly empty without a session token
pub fn use_reference_website() -> QueryState<Option<ReferenceWebsite>> {
    let cache = use_query_cache();
    let client = use_client();
    let session = use_admin_session();
    use_query(cache.reference_website, move || {
        let client = client.ready()?;
        let token = session.token()?;
        Some(async move { api::get_reference_website(&client, &token).await })
    })
}

#[derive(Clone, Copy)]
pub struct ContentMutations {
    cache: QueryCache,
    client: ClientContext,
    session: AdminSession,
    toasts: ToastService,
}

pub fn use_content_mutations() -> ContentMutations {
    ContentMutations {
        cache: use_query_cache(),
        client: use_client(),
        session: use_admin_session(),
        toasts: use_toasts(),
    }
}

impl ContentMutations {
    fn authorized(&self) -> Option<(crate::shared::client::ApiClient, String)> {
        let client = self.client.client.get_untracked()?;
        let token = self.session.token()?;
        Some((client, token))
    }

    pub fn save_landing(&self, language: String, hero_title: String, hero_subtitle: String) {
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = api::update_landing_page_translation(
                &client,
                &language,
                &hero_title,
                &hero_subtitle,
                &token,
            )
            .await;
            match result {
                Ok(()) => {
                    this.cache.invalidate_landing();
                    this.toasts.success("Landing page saved");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }

    pub fn save_about_us(&self, language: String, title: String, content: String) {
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result =
                api::update_about_us_translation(&client, &language, &title, &content, &token)
                    .await;
            match result {
                Ok(()) => {
                    this.cache.invalidate_about_us();
                    this.toasts.success("About us saved");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }

    pub fn save_reference_website(&self, reference: ReferenceWebsite) {
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::set_reference_website(&client, &reference, &token).await {
                Ok(()) => {
                    this.cache.invalidate_reference_website();
                    this.toasts.success("Reference website saved");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }
}
