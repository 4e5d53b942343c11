use serde::{Deserialize, Serialize};

/// One translatable field across all languages
///
/// The wire format is an ordered list of `[languageCode, text]` pairs, which
/// is what the backend returns for every translatable entity field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationBundle {
    pub entries: Vec<(String, String)>,
}

impl TranslationBundle {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Exact text for a language, if present
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, text)| text.as_str())
    }

    /// Resolve display text: exact language, else the default language,
    /// else the empty string.
    pub fn resolve(&self, language: &str, default_language: &str) -> &str {
        self.get(language)
            .or_else(|| self.get(default_language))
            .unwrap_or("")
    }

    /// Insert or replace the entry for a language, preserving entry order
    pub fn set(&mut self, language: &str, text: String) {
        match self.entries.iter_mut().find(|(lang, _)| lang == language) {
            Some((_, existing)) => *existing = text,
            None => self.entries.push((language.to_string(), text)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> TranslationBundle {
        TranslationBundle::new(vec![
            ("en".into(), "Seeds".into()),
            ("hi".into(), "बीज".into()),
        ])
    }

    #[test]
    fn resolves_exact_language() {
        assert_eq!(bundle().resolve("hi", "en"), "बीज");
    }

    #[test]
    fn falls_back_to_default_language() {
        assert_eq!(bundle().resolve("ta", "en"), "Seeds");
    }

    #[test]
    fn missing_everywhere_resolves_empty() {
        let empty = TranslationBundle::default();
        assert_eq!(empty.resolve("hi", "en"), "");
    }

    #[test]
    fn set_replaces_in_place() {
        let mut b = bundle();
        b.set("hi", "नए बीज".into());
        assert_eq!(b.entries.len(), 2);
        assert_eq!(b.get("hi"), Some("नए बीज"));
        b.set("ta", "விதைகள்".into());
        assert_eq!(b.entries.len(), 3);
    }

    #[test]
    fn wire_format_is_pair_list() {
        let json = serde_json::to_string(&bundle()).unwrap();
        assert_eq!(json, r#"{"entries":[["en","Seeds"],["hi","बीज"]]}"#);
    }
}
