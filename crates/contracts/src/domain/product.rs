use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Category, ProductType};
use crate::shared::translation::TranslationBundle;

/// Translatable fields of a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTranslations {
    pub name: TranslationBundle,
    pub description: TranslationBundle,
}

/// Product as returned by the backend, translations unresolved
///
/// Invariants (enforced by the backend, validated client-side before any
/// mutation): price >= 0, stock >= 0, minimum order quantity >= 1. Price is
/// in integer minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub category: Category,
    pub translations: ProductTranslations,
    pub price: u64,
    pub stock: u64,
    pub minimum_order_quantity: u64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub id: String,
    pub category: Category,
    pub translations: ProductTranslations,
    pub price: u64,
    pub stock: u64,
    pub minimum_order_quantity: u64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Product with name and description resolved for one language
///
/// Resolution happens once at the data-access boundary so presentation code
/// works with plain strings instead of re-deriving translations ad hoc.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub stock: u64,
    pub minimum_order_quantity: u64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn from_view(view: ProductView, language: &str, default_language: &str) -> Self {
        let name = view
            .translations
            .name
            .resolve(language, default_language)
            .to_string();
        let description = view
            .translations
            .description
            .resolve(language, default_language)
            .to_string();
        Self {
            id: view.id,
            category: view.category,
            name,
            description,
            price: view.price,
            stock: view.stock,
            minimum_order_quantity: view.minimum_order_quantity,
            images: view.images,
            created_at: view.created_at,
        }
    }

    pub fn product_type(&self) -> ProductType {
        ProductType::from_category(self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ProductView {
        ProductView {
            id: "p-1".into(),
            category: Category::Seed,
            translations: ProductTranslations {
                name: TranslationBundle::new(vec![
                    ("en".into(), "Wheat Seeds".into()),
                    ("hi".into(), "गेहूं के बीज".into()),
                ]),
                description: TranslationBundle::new(vec![("en".into(), "High yield".into())]),
            },
            price: 100,
            stock: 40,
            minimum_order_quantity: 2,
            images: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn resolves_once_at_the_boundary() {
        let product = Product::from_view(view(), "hi", "en");
        assert_eq!(product.name, "गेहूं के बीज");
        // description has no Hindi entry, falls back to the default language
        assert_eq!(product.description, "High yield");
    }

    #[test]
    fn missing_both_languages_resolves_empty() {
        let mut v = view();
        v.translations.description = TranslationBundle::default();
        let product = Product::from_view(v, "ta", "en");
        assert_eq!(product.description, "");
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(view()).unwrap();
        assert!(json.get("minimumOrderQuantity").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
