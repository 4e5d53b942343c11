use leptos::prelude::*;
use thaw::*;

use crate::shared::storage;

use super::{modal_should_show, use_i18n, Language, MODAL_SEEN_KEY};

/// First-visit language choice
///
/// Shows once until a language is picked, then persists the seen-flag and
/// never re-opens unless that flag is cleared externally. The flag is
/// independent of the active-language value itself.
#[component]
pub fn LanguageSelectModal() -> impl IntoView {
    let i18n = use_i18n();
    let open = RwSignal::new(modal_should_show(storage::get(MODAL_SEEN_KEY).as_deref()));

    let select = move |language: Language| {
        i18n.set_language(language);
        storage::set(MODAL_SEEN_KEY, "true");
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Select Your Language / अपनी भाषा चुनें"</DialogTitle>
                    <DialogContent>
                        <p class="language-modal-hint">
                            "Choose your preferred language for the best experience"
                        </p>
                        <div class="language-grid">
                            {Language::all()
                                .into_iter()
                                .map(|language| {
                                    view! {
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| select(language)
                                        >
                                            <span class="language-native">
                                                {language.native_name()}
                                            </span>
                                            <span class="language-name">{language.name()}</span>
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </DialogContent>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
