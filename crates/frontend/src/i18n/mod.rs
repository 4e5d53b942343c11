//! Static UI string table and language handling
//!
//! Entity content (product names, landing copy) is translated by the
//! backend; this module only covers the fixed UI strings. Resolution order
//! is exact language, then the default language, then the raw key itself so
//! an unresolved key stays visible instead of silently disappearing.

mod context;
mod language_modal;
mod table;

pub use context::{use_i18n, I18n};
pub use language_modal::LanguageSelectModal;
pub use table::builtin;

use std::collections::HashMap;

pub const LANGUAGE_KEY: &str = "app-language";
pub const MODAL_SEEN_KEY: &str = "language-modal-seen";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Hi,
    Ta,
    Te,
    Kn,
    Gu,
    Mr,
    Pa,
    Bn,
}

pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Kn => "kn",
            Language::Gu => "gu",
            Language::Mr => "mr",
            Language::Pa => "pa",
            Language::Bn => "bn",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Ta => "Tamil",
            Language::Te => "Telugu",
            Language::Kn => "Kannada",
            Language::Gu => "Gujarati",
            Language::Mr => "Marathi",
            Language::Pa => "Punjabi",
            Language::Bn => "Bengali",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Ta => "தமிழ்",
            Language::Te => "తెలుగు",
            Language::Kn => "ಕನ್ನಡ",
            Language::Gu => "ગુજરાતી",
            Language::Mr => "मराठी",
            Language::Pa => "ਪੰਜਾਬੀ",
            Language::Bn => "বাংলা",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![
            Language::En,
            Language::Hi,
            Language::Ta,
            Language::Te,
            Language::Kn,
            Language::Gu,
            Language::Mr,
            Language::Pa,
            Language::Bn,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::all().into_iter().find(|l| l.code() == code)
    }
}

/// UI string table with per-language key maps
pub struct StringTable {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl StringTable {
    pub fn new(tables: HashMap<Language, HashMap<&'static str, &'static str>>) -> Self {
        Self { tables }
    }

    fn text(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables.get(&language)?.get(key).copied()
    }

    /// Exact language, else default language, else the raw key
    pub fn resolve(&self, key: &str, language: Language) -> String {
        self.text(language, key)
            .or_else(|| self.text(DEFAULT_LANGUAGE, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}

/// Active language from its persisted code, defaulting on anything invalid
pub fn stored_language(stored: Option<&str>) -> Language {
    stored
        .and_then(Language::from_code)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// First-visit modal shows until the persisted seen-flag is set
pub fn modal_should_show(seen_flag: Option<&str>) -> bool {
    seen_flag != Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StringTable {
        let mut en = HashMap::new();
        en.insert("nav.home", "Home");
        en.insert("nav.products", "Products");
        let mut hi = HashMap::new();
        hi.insert("nav.home", "होम");
        let mut tables = HashMap::new();
        tables.insert(Language::En, en);
        tables.insert(Language::Hi, hi);
        StringTable::new(tables)
    }

    #[test]
    fn exact_language_wins() {
        assert_eq!(table().resolve("nav.home", Language::Hi), "होम");
    }

    #[test]
    fn falls_back_to_default_language() {
        assert_eq!(table().resolve("nav.products", Language::Hi), "Products");
    }

    #[test]
    fn unresolvable_key_stays_visible() {
        assert_eq!(table().resolve("nav.missing", Language::Hi), "nav.missing");
    }

    #[test]
    fn stored_language_parses_known_codes() {
        assert_eq!(stored_language(Some("hi")), Language::Hi);
        assert_eq!(stored_language(Some("xx")), DEFAULT_LANGUAGE);
        assert_eq!(stored_language(None), DEFAULT_LANGUAGE);
    }

    #[test]
    fn modal_state_machine() {
        // unseen -> shown
        assert!(modal_should_show(None));
        // dismissed stays dismissed across reloads
        assert!(!modal_should_show(Some("true")));
        // anything else counts as unseen
        assert!(modal_should_show(Some("1")));
    }
}
