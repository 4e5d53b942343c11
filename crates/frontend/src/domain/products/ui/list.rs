//! Public product catalog with a category filter driven by the query string

use contracts::domain::Product;
use contracts::enums::Category;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

use crate::domain::products::hooks::use_products;
use crate::i18n::use_i18n;
use crate::shared::components::{ErrorState, LoadingState};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let i18n = use_i18n();
    let query = use_query_map();
    let navigate = use_navigate();

    let category = Signal::derive(move || {
        query
            .read()
            .get("category")
            .and_then(|code| Category::from_code(&code))
    });

    let products = use_products(category);

    let set_category = move |next: Option<Category>| {
        let href = match next {
            Some(category) => format!("/products?category={}", category.code()),
            None => "/products".to_string(),
        };
        navigate(&href, Default::default());
    };

    view! {
        <section class="products-page">
            <h1>{move || i18n.t("products.title")}</h1>

            <div class="category-filter">
                <span>{move || i18n.t("products.filter")}</span>
                <Button
                    appearance=Signal::derive(move || {
                        if category.get().is_none() {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        }
                    })
                    on_click={
                        let set_category = set_category.clone();
                        move |_| set_category(None)
                    }
                >
                    {move || i18n.t("products.all")}
                </Button>
                <For each=Category::all key=|c| c.code() let:entry>
                    <Button
                        appearance=Signal::derive(move || {
                            if category.get() == Some(entry) {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            }
                        })
                        on_click={
                            let set_category = set_category.clone();
                            move |_| set_category(Some(entry))
                        }
                    >
                        {move || i18n.t(&entry.translation_key())}
                    </Button>
                </For>
            </div>

            <Show when=move || products.loading.get()>
                <LoadingState />
            </Show>

            {move || {
                products
                    .error
                    .get()
                    .map(|message| {
                        view! {
                            <ErrorState
                                message=message
                                on_retry=Callback::new(move |()| products.refetch())
                            />
                        }
                    })
            }}

            {move || {
                products
                    .data
                    .get()
                    .map(|items| {
                        if items.is_empty() {
                            view! { <p class="empty-state">{i18n.t("products.empty")}</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="product-grid">
                                    {items
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product /> })
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
fn ProductCard(product: Product) -> impl IntoView {
    let i18n = use_i18n();
    let href = format!("/products/{}", product.id);
    let image = product.images.first().cloned();

    view! {
        <div class="product-card">
            {image.map(|src| view! { <img src=src alt=product.name.clone() /> })}
            <h3>{product.name.clone()}</h3>
            <p class="product-price">{format!("₹{}", product.price)}</p>
            <p class="product-stock">
                {move || i18n.t("product.stock")} ": " {product.stock}
            </p>
            <A href=href>{move || i18n.t("product.viewDetails")}</A>
        </div>
    }
}
