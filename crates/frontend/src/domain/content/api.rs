//! Admin-editable site content RPCs

use contracts::domain::{AboutUsContent, LandingPageTranslations, ReferenceWebsite};
use serde::Serialize;

use crate::shared::client::ApiClient;

pub async fn get_landing_page_translations(
    client: &ApiClient,
    language: &str,
) -> Result<LandingPageTranslations, String> {
    client
        .get(&format!("/api/content/landing?language={}", language), None)
        .await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LandingUpdate<'a> {
    language: &'a str,
    hero_title: &'a str,
    hero_subtitle: &'a str,
}

pub async fn update_landing_page_translation(
    client: &ApiClient,
    language: &str,
    hero_title: &str,
    hero_subtitle: &str,
    token: &str,
) -> Result<(), String> {
    client
        .put_unit(
            "/api/content/landing",
            &LandingUpdate {
                language,
                hero_title,
                hero_subtitle,
            },
            Some(token),
        )
        .await
}

pub async fn get_about_us(client: &ApiClient, language: &str) -> Result<AboutUsContent, String> {
    client
        .get(&format!("/api/content/about-us?language={}", language), None)
        .await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AboutUsUpdate<'a> {
    language: &'a str,
    title: &'a str,
    content: &'a str,
}

pub async fn update_about_us_translation(
    client: &ApiClient,
    language: &str,
    title: &str,
    content: &str,
    token: &str,
) -> Result<(), String> {
    client
        .put_unit(
            "/api/content/about-us",
            &AboutUsUpdate {
                language,
                title,
                content,
            },
            Some(token),
        )
        .await
}

pub async fn get_reference_website(
    client: &ApiClient,
    token: &str,
) -> Result<Option<ReferenceWebsite>, String> {
    client.get("/api/reference-website", Some(token)).await
}

pub async fn set_reference_website(
    client: &ApiClient,
    reference: &ReferenceWebsite,
    token: &str,
) -> Result<(), String> {
    client
        .put_unit("/api/reference-website", reference, Some(token))
        .await
}
