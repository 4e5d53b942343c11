//! Landing page: hero copy from the backend, category grid, about-us
//! section and the contact strip

use contracts::enums::Category;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::content::hooks::{use_about_us, use_landing_translations};
use crate::i18n::use_i18n;
use crate::shared::contact::{GOOGLE_MAPS_LINK, SHOP_ADDRESS, SHOP_NAME, SHOP_PHONE_FORMATTED};

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    let landing = use_landing_translations();
    let about = use_about_us();

    let hero_title = Signal::derive(move || {
        let language = i18n.code();
        let default_language = i18n.default_code();
        landing
            .data
            .get()
            .map(|content| content.hero_title.resolve(language, default_language).to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| i18n.t("app.title"))
    });

    let hero_subtitle = Signal::derive(move || {
        let language = i18n.code();
        let default_language = i18n.default_code();
        landing
            .data
            .get()
            .map(|content| {
                content
                    .hero_subtitle
                    .resolve(language, default_language)
                    .to_string()
            })
            .unwrap_or_default()
    });

    view! {
        <section class="home-page">
            <div class="hero">
                <h1>{move || hero_title.get()}</h1>
                <p>{move || hero_subtitle.get()}</p>
                <A href="/products">{move || i18n.t("nav.products")}</A>
            </div>

            <div class="category-section">
                <h2>{move || i18n.t("categories.title")}</h2>
                <div class="category-grid">
                    {Category::all()
                        .into_iter()
                        .map(|category| {
                            let href = format!("/products?category={}", category.code());
                            view! {
                                <div class="category-tile">
                                    <A href=href>
                                        {move || i18n.t(&category.translation_key())}
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                let language = i18n.code();
                let default_language = i18n.default_code();
                about
                    .data
                    .get()
                    .filter(|content| !content.title.is_empty())
                    .map(|content| {
                        view! {
                            <div class="about-section">
                                <h2>{content.title.resolve(language, default_language).to_string()}</h2>
                                <p>{content.content.resolve(language, default_language).to_string()}</p>
                            </div>
                        }
                    })
            }}

            <div class="contact-strip">
                <h2>{SHOP_NAME}</h2>
                <p>{SHOP_ADDRESS}</p>
                <p>{SHOP_PHONE_FORMATTED}</p>
                <a href=GOOGLE_MAPS_LINK target="_blank">
                    {move || i18n.t("contact.openMap")}
                </a>
            </div>
        </section>
    }
}
