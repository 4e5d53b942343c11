//! Product RPCs
//!
//! Reads carry the active language so the backend can prune bundles; the
//! returned views still resolve client-side against the default language.

use contracts::domain::{ProductInput, ProductTranslations, ProductView};
use contracts::enums::Category;
use serde::Serialize;

use crate::shared::client::ApiClient;

pub async fn get_all_products(
    client: &ApiClient,
    language: &str,
) -> Result<Vec<ProductView>, String> {
    client
        .get(&format!("/api/products?language={}", language), None)
        .await
}

pub async fn get_products_by_category(
    client: &ApiClient,
    category: Category,
    language: &str,
) -> Result<Vec<ProductView>, String> {
    client
        .get(
            &format!(
                "/api/products/by-category?category={}&language={}",
                category.code(),
                language
            ),
            None,
        )
        .await
}

pub async fn get_product_translations(
    client: &ApiClient,
    id: &str,
    language: &str,
) -> Result<ProductTranslations, String> {
    client
        .get(
            &format!("/api/products/{}/translations?language={}", id, language),
            None,
        )
        .await
}

pub async fn create_product(
    client: &ApiClient,
    input: &ProductInput,
    token: &str,
) -> Result<(), String> {
    client.post_unit("/api/products", input, Some(token)).await
}

pub async fn update_product(
    client: &ApiClient,
    input: &ProductInput,
    token: &str,
) -> Result<(), String> {
    client
        .put_unit(&format!("/api/products/{}", input.id), input, Some(token))
        .await
}

pub async fn delete_product(client: &ApiClient, id: &str, token: &str) -> Result<(), String> {
    client
        .delete_unit(&format!("/api/products/{}", id), Some(token))
        .await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslationUpdate<'a> {
    language: &'a str,
    name: &'a str,
    description: &'a str,
}

/// Replace the entries for one language on an existing product
pub async fn update_product_translations(
    client: &ApiClient,
    id: &str,
    language: &str,
    name: &str,
    description: &str,
    token: &str,
) -> Result<(), String> {
    client
        .put_unit(
            &format!("/api/products/{}/translations", id),
            &TranslationUpdate {
                language,
                name,
                description,
            },
            Some(token),
        )
        .await
}
