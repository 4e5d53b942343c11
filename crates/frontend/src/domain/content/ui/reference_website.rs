//! Admin reference-website record: a single URL plus optional design notes,
//! previewed inline in an iframe

use contracts::domain::ReferenceWebsite;
use leptos::prelude::*;
use thaw::*;

use crate::domain::content::hooks::{use_content_mutations, use_reference_website};
use crate::i18n::use_i18n;
use crate::shared::components::{ErrorState, LoadingState};

#[component]
pub fn ReferenceWebsitePage() -> impl IntoView {
    let i18n = use_i18n();
    let reference = use_reference_website();
    let mutations = use_content_mutations();

    let url = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(Some(stored)) = reference.data.get() {
            url.set(stored.url);
            notes.set(stored.design_notes.unwrap_or_default());
        }
    });

    let save = move |_| {
        let url_value = url.get_untracked();
        if url_value.is_empty() {
            return;
        }
        let notes_value = notes.get_untracked();
        mutations.save_reference_website(ReferenceWebsite {
            url: url_value,
            design_notes: (!notes_value.is_empty()).then_some(notes_value),
        });
    };

    view! {
        <section class="reference-website-page">
            <h1>{move || i18n.t("admin.reference")}</h1>

            <Show when=move || reference.loading.get()>
                <LoadingState />
            </Show>

            {move || {
                reference
                    .error
                    .get()
                    .map(|message| {
                        view! {
                            <ErrorState
                                message=message
                                on_retry=Callback::new(move |()| reference.refetch())
                            />
                        }
                    })
            }}

            <div class="form-field">
                <label>"URL"</label>
                <Input value=url placeholder="https://" />
            </div>
            <div class="form-field">
                <label>"Design notes"</label>
                <Input value=notes />
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=save>
                {move || i18n.t("save")}
            </Button>

            <Show when=move || !url.get().is_empty()>
                <iframe class="reference-preview" src=move || url.get()></iframe>
            </Show>
        </section>
    }
}
