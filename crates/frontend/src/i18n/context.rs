use leptos::prelude::*;

use crate::shared::storage;

use super::{builtin, stored_language, Language, DEFAULT_LANGUAGE, LANGUAGE_KEY};

/// Process-wide active language
///
/// Initialized from persisted storage at startup, mutated only through
/// `set_language`; every consumer re-renders reactively on change.
#[derive(Clone, Copy)]
pub struct I18n {
    language: RwSignal<Language>,
}

impl I18n {
    pub fn provide() -> Self {
        let initial = stored_language(storage::get(LANGUAGE_KEY).as_deref());
        let i18n = Self {
            language: RwSignal::new(initial),
        };
        provide_context(i18n);
        i18n
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Active language code on the wire, e.g. "hi"
    pub fn code(&self) -> &'static str {
        self.language.get().code()
    }

    pub fn set_language(&self, language: Language) {
        storage::set(LANGUAGE_KEY, language.code());
        self.language.set(language);
    }

    /// Resolve a UI string for the active language (reactive)
    pub fn t(&self, key: &str) -> String {
        builtin().resolve(key, self.language.get())
    }

    pub fn default_code(&self) -> &'static str {
        DEFAULT_LANGUAGE.code()
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not provided in context")
}
