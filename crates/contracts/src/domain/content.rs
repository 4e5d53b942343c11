use serde::{Deserialize, Serialize};

use crate::shared::translation::TranslationBundle;

/// Landing page hero copy, one bundle per translatable field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageTranslations {
    pub hero_title: TranslationBundle,
    pub hero_subtitle: TranslationBundle,
}

/// About-us section copy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsContent {
    pub title: TranslationBundle,
    pub content: TranslationBundle,
}

/// Single admin-editable reference record, not versioned
///
/// Canonical field name is `designNotes`; the older `description` variant of
/// this record is not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceWebsite {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_notes: Option<String>,
}

/// Profile the backend keeps for the calling identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_website_omits_absent_notes() {
        let reference = ReferenceWebsite {
            url: "https://example.com".into(),
            design_notes: None,
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com"}"#);

        let parsed: ReferenceWebsite = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.design_notes, None);
    }
}
