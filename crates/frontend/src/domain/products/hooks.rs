use contracts::domain::{Product, ProductInput};
use contracts::enums::Category;
use contracts::shared::validation::{validate_price, validate_stock};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::use_i18n;
use crate::shared::cache::{use_query, use_query_cache, QueryCache, QueryState};
use crate::shared::client::{use_client, ClientContext};
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::admin::{use_admin_session, AdminSession};

use super::api;

/// Product list, optionally narrowed to one category.
///
/// The category signal and the active language are both part of the cache
/// key; translations resolve here so pages only ever see plain strings.
pub fn use_products(category: Signal<Option<Category>>) -> QueryState<Vec<Product>> {
    let cache = use_query_cache();
    let client = use_client();
    let i18n = use_i18n();
    use_query(cache.products, move || {
        let client = client.ready()?;
        let language = i18n.code();
        let default_language = i18n.default_code();
        let category = category.get();
        Some(async move {
            let views = match category {
                Some(category) => {
                    api::get_products_by_category(&client, category, language).await?
                }
                None => api::get_all_products(&client, language).await?,
            };
            Ok(views
                .into_iter()
                .map(|view| Product::from_view(view, language, default_language))
                .collect())
        })
    })
}

/// Unresolved views for the admin manager, which edits bundles directly
pub fn use_product_views() -> QueryState<Vec<contracts::domain::ProductView>> {
    let cache = use_query_cache();
    let client = use_client();
    let i18n = use_i18n();
    use_query(cache.products, move || {
        let client = client.ready()?;
        let language = i18n.code();
        Some(async move { api::get_all_products(&client, language).await })
    })
}

/// Single product by id, looked up in the unfiltered list
pub fn use_product(id: Signal<String>) -> QueryState<Option<Product>> {
    let cache = use_query_cache();
    let client = use_client();
    let i18n = use_i18n();
    use_query(cache.products, move || {
        let client = client.ready()?;
        let language = i18n.code();
        let default_language = i18n.default_code();
        let id = id.get();
        Some(async move {
            let views = api::get_all_products(&client, language).await?;
            Ok(views
                .into_iter()
                .find(|view| view.id == id)
                .map(|view| Product::from_view(view, language, default_language)))
        })
    })
}

#[derive(Clone, Copy)]
pub struct ProductMutations {
    cache: QueryCache,
    client: ClientContext,
    session: AdminSession,
    toasts: ToastService,
}

pub fn use_product_mutations() -> ProductMutations {
    ProductMutations {
        cache: use_query_cache(),
        client: use_client(),
        session: use_admin_session(),
        toasts: use_toasts(),
    }
}

impl ProductMutations {
    fn authorized(&self) -> Option<(crate::shared::client::ApiClient, String)> {
        let client = self.client.client.get_untracked()?;
        let token = self.session.token()?;
        Some((client, token))
    }

    /// Rejects invalid price or stock before touching the network
    pub fn save(&self, input: ProductInput, is_new: bool) {
        if let Some(message) = validate_price(&input.price.to_string())
            .or_else(|| validate_stock(&input.stock.to_string()))
        {
            self.toasts.error(message);
            return;
        }
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = if is_new {
                api::create_product(&client, &input, &token).await
            } else {
                api::update_product(&client, &input, &token).await
            };
            match result {
                Ok(()) => {
                    this.cache.invalidate_products();
                    this.toasts.success("Product saved");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }

    pub fn delete(&self, id: String) {
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::delete_product(&client, &id, &token).await {
                Ok(()) => {
                    this.cache.invalidate_products();
                    this.toasts.success("Product deleted");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }

    pub fn save_translations(&self, id: String, language: String, name: String, description: String) {
        let Some((client, token)) = self.authorized() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = api::update_product_translations(
                &client,
                &id,
                &language,
                &name,
                &description,
                &token,
            )
            .await;
            match result {
                Ok(()) => {
                    this.cache.invalidate_products();
                    this.toasts.success("Translations saved");
                }
                Err(message) => this.toasts.error(message),
            }
        });
    }
}
