//! Admin editor for the landing hero and about-us copy
//!
//! Edits apply to the active language only; switching the language in the
//! header reloads the form with that language's entries.

use leptos::prelude::*;
use thaw::*;

use crate::domain::content::hooks::{
    use_about_us, use_content_mutations, use_landing_translations,
};
use crate::i18n::use_i18n;
use crate::shared::components::LoadingState;

#[component]
pub fn EditSiteTextPage() -> impl IntoView {
    let i18n = use_i18n();
    let landing = use_landing_translations();
    let about = use_about_us();
    let mutations = use_content_mutations();

    let hero_title = RwSignal::new(String::new());
    let hero_subtitle = RwSignal::new(String::new());
    let about_title = RwSignal::new(String::new());
    let about_content = RwSignal::new(String::new());

    Effect::new(move |_| {
        let language = i18n.code();
        let default_language = i18n.default_code();
        if let Some(content) = landing.data.get() {
            hero_title.set(content.hero_title.resolve(language, default_language).to_string());
            hero_subtitle.set(
                content
                    .hero_subtitle
                    .resolve(language, default_language)
                    .to_string(),
            );
        }
    });

    Effect::new(move |_| {
        let language = i18n.code();
        let default_language = i18n.default_code();
        if let Some(content) = about.data.get() {
            about_title.set(content.title.resolve(language, default_language).to_string());
            about_content.set(content.content.resolve(language, default_language).to_string());
        }
    });

    let save_landing = move |_| {
        mutations.save_landing(
            i18n.code().to_string(),
            hero_title.get_untracked(),
            hero_subtitle.get_untracked(),
        );
    };

    let save_about = move |_| {
        mutations.save_about_us(
            i18n.code().to_string(),
            about_title.get_untracked(),
            about_content.get_untracked(),
        );
    };

    view! {
        <section class="edit-text-page">
            <h1>{move || i18n.t("admin.content")}</h1>
            <p class="edit-text-language">
                {move || format!("Editing: {}", i18n.language().native_name())}
            </p>

            <Show when=move || landing.loading.get() || about.loading.get()>
                <LoadingState />
            </Show>

            <div class="edit-text-section">
                <h2>"Landing page"</h2>
                <div class="form-field">
                    <label>"Hero title"</label>
                    <Input value=hero_title />
                </div>
                <div class="form-field">
                    <label>"Hero subtitle"</label>
                    <Input value=hero_subtitle />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=save_landing>
                    {move || i18n.t("save")}
                </Button>
            </div>

            <div class="edit-text-section">
                <h2>"About us"</h2>
                <div class="form-field">
                    <label>"Title"</label>
                    <Input value=about_title />
                </div>
                <div class="form-field">
                    <label>"Content"</label>
                    <Input value=about_content />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=save_about>
                    {move || i18n.t("save")}
                </Button>
            </div>
        </section>
    }
}
