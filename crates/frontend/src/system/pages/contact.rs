//! Contact page: shop details, WhatsApp entry point and the embedded map

use leptos::prelude::*;
use thaw::*;

use crate::i18n::use_i18n;
use crate::shared::contact::{
    GOOGLE_MAPS_EMBED_URL, GOOGLE_MAPS_LINK, SHOP_ADDRESS, SHOP_NAME, SHOP_PHONE_FORMATTED,
};
use crate::shared::whatsapp::open_whatsapp_chat;

#[component]
pub fn ContactPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="contact-page">
            <h1>{move || i18n.t("contact.title")}</h1>

            <div class="contact-details">
                <h2>{SHOP_NAME}</h2>
                <p>{SHOP_ADDRESS}</p>
                <p>
                    <a href=format!("tel:{}", SHOP_PHONE_FORMATTED.replace(' ', ""))>
                        {SHOP_PHONE_FORMATTED}
                    </a>
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_whatsapp_chat("Hi, I have a question about your products.")
                >
                    "WhatsApp"
                </Button>
            </div>

            <div class="contact-map">
                <h2>{move || i18n.t("contact.location")}</h2>
                <iframe src=GOOGLE_MAPS_EMBED_URL loading="lazy"></iframe>
                <a href=GOOGLE_MAPS_LINK target="_blank">
                    {move || i18n.t("contact.openMap")}
                </a>
            </div>
        </section>
    }
}
