//! Admin product manager
//!
//! The manager edits unresolved views so translation bundles survive a
//! round trip; the form only touches the entries of the active language.

use chrono::Utc;
use contracts::domain::{ProductInput, ProductView};
use contracts::enums::Category;
use contracts::shared::validation::{validate_price, validate_required, validate_stock};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

use crate::domain::products::hooks::{use_product_mutations, use_product_views};
use crate::i18n::use_i18n;
use crate::shared::components::{ErrorState, FieldError, LoadingState};

#[component]
pub fn ProductManagerPage() -> impl IntoView {
    let i18n = use_i18n();
    let products = use_product_views();
    let mutations = use_product_mutations();

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<ProductView>);

    let open_create = move |_| {
        editing.set(None);
        form_open.set(true);
    };

    view! {
        <section class="product-manager">
            <h1>{move || i18n.t("admin.products")}</h1>
            <Button appearance=ButtonAppearance::Primary on_click=open_create>
                {move || i18n.t("add")}
            </Button>

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

            <table class="manager-table">
                <thead>
                    <tr>
                        <th>{move || i18n.t("products.title")}</th>
                        <th>{move || i18n.t("product.price")}</th>
                        <th>{move || i18n.t("product.stock")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let language = i18n.code();
                        let default_language = i18n.default_code();
                        products
                            .data
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|view| {
                                let name = view
                                    .translations
                                    .name
                                    .resolve(language, default_language)
                                    .to_string();
                                let id = view.id.clone();
                                let edit_view = view.clone();
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{format!("₹{}", view.price)}</td>
                                        <td>{view.stock}</td>
                                        <td>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    editing.set(Some(edit_view.clone()));
                                                    form_open.set(true);
                                                }
                                            >
                                                {i18n.t("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| mutations.delete(id.clone())
                                            >
                                                {i18n.t("delete")}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <ProductFormDialog open=form_open editing />
        </section>
    }
}

/// Create/edit form; validation failures block the save entirely
#[component]
fn ProductFormDialog(open: RwSignal<bool>, editing: RwSignal<Option<ProductView>>) -> impl IntoView {
    let i18n = use_i18n();
    let mutations = use_product_mutations();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(Category::Seed);
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let minimum = RwSignal::new("1".to_string());
    let image = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let price_error = RwSignal::new(None::<String>);
    let stock_error = RwSignal::new(None::<String>);

    // reload the fields whenever a different product is opened
    Effect::new(move |_| {
        let language = i18n.code();
        let default_language = i18n.default_code();
        match editing.get() {
            Some(view) => {
                name.set(
                    view.translations
                        .name
                        .resolve(language, default_language)
                        .to_string(),
                );
                description.set(
                    view.translations
                        .description
                        .resolve(language, default_language)
                        .to_string(),
                );
                category.set(view.category);
                price.set(view.price.to_string());
                stock.set(view.stock.to_string());
                minimum.set(view.minimum_order_quantity.to_string());
                image.set(view.images.first().cloned().unwrap_or_default());
            }
            None => {
                name.set(String::new());
                description.set(String::new());
                category.set(Category::Seed);
                price.set(String::new());
                stock.set(String::new());
                minimum.set("1".to_string());
                image.set(String::new());
            }
        }
    });

    let submit = move |_| {
        let name_value = name.get_untracked();
        let price_value = price.get_untracked();
        let stock_value = stock.get_untracked();

        name_error.set(validate_required(&name_value, "Name"));
        price_error.set(validate_price(&price_value));
        stock_error.set(validate_stock(&stock_value));
        if name_error.get_untracked().is_some()
            || price_error.get_untracked().is_some()
            || stock_error.get_untracked().is_some()
        {
            return;
        }

        let language = i18n.code();
        let existing = editing.get_untracked();
        let is_new = existing.is_none();

        // when only the wording changed, send the narrower translation update
        if let Some(view) = &existing {
            let record_unchanged = view.category == category.get_untracked()
                && view.price.to_string() == price_value
                && view.stock.to_string() == stock_value
                && view.minimum_order_quantity.to_string() == minimum.get_untracked()
                && view.images.first().cloned().unwrap_or_default() == image.get_untracked();
            if record_unchanged {
                mutations.save_translations(
                    view.id.clone(),
                    language.to_string(),
                    name_value,
                    description.get_untracked(),
                );
                open.set(false);
                return;
            }
        }

        let mut input = match existing {
            Some(view) => ProductInput {
                id: view.id,
                category: category.get_untracked(),
                translations: view.translations,
                price: view.price,
                stock: view.stock,
                minimum_order_quantity: view.minimum_order_quantity,
                images: view.images,
                created_at: view.created_at,
            },
            None => ProductInput {
                id: Uuid::new_v4().to_string(),
                category: category.get_untracked(),
                translations: Default::default(),
                price: 0,
                stock: 0,
                minimum_order_quantity: 1,
                images: vec![],
                created_at: Utc::now(),
            },
        };

        input.translations.name.set(language, name_value);
        input
            .translations
            .description
            .set(language, description.get_untracked());
        input.price = price_value.parse().unwrap_or(0);
        input.stock = stock_value.parse().unwrap_or(0);
        input.minimum_order_quantity = minimum.get_untracked().parse().unwrap_or(1);
        input.images = if image.get_untracked().is_empty() {
            vec![]
        } else {
            vec![image.get_untracked()]
        };

        mutations.save(input, is_new);
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || {
                            if editing.get().is_some() { i18n.t("edit") } else { i18n.t("add") }
                        }}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form-field">
                            <label>"Name"</label>
                            <Input value=name />
                            <FieldError error=name_error />
                        </div>
                        <div class="form-field">
                            <label>{move || i18n.t("product.description")}</label>
                            <Input value=description />
                        </div>
                        <div class="form-field">
                            <label>{move || i18n.t("products.filter")}</label>
                            <div class="category-picker">
                                {Category::all()
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <Button
                                                appearance=Signal::derive(move || {
                                                    if category.get() == entry {
                                                        ButtonAppearance::Primary
                                                    } else {
                                                        ButtonAppearance::Secondary
                                                    }
                                                })
                                                size=ButtonSize::Small
                                                on_click=move |_| category.set(entry)
                                            >
                                                {move || i18n.t(&entry.translation_key())}
                                            </Button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="form-field">
                            <label>{move || i18n.t("product.price")}</label>
                            <Input value=price />
                            <FieldError error=price_error />
                        </div>
                        <div class="form-field">
                            <label>{move || i18n.t("product.stock")}</label>
                            <Input value=stock />
                            <FieldError error=stock_error />
                        </div>
                        <div class="form-field">
                            <label>{move || i18n.t("product.minOrder")}</label>
                            <Input value=minimum />
                        </div>
                        <div class="form-field">
                            <label>"Image URL"</label>
                            <Input value=image />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=submit>
                            {move || i18n.t("save")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            {move || i18n.t("cancel")}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
