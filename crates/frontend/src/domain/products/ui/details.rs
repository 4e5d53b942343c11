//! Product detail page with the order-channel chooser

use contracts::domain::Product;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::products::hooks::use_product;
use crate::i18n::use_i18n;
use crate::shared::components::{ErrorState, LoadingState};
use crate::shared::whatsapp;

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let i18n = use_i18n();
    let params = use_params_map();
    let id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    let product = use_product(id);
    let order_open = RwSignal::new(false);

    view! {
        <section class="product-details">
            <Show when=move || product.loading.get()>
                <LoadingState />
            </Show>

            {move || {
                product
                    .error
                    .get()
                    .map(|message| {
                        view! {
                            <ErrorState
                                message=message
                                on_retry=Callback::new(move |()| product.refetch())
                            />
                        }
                    })
            }}

            {move || {
                product
                    .data
                    .get()
                    .map(|found| match found {
                        Some(item) => {
                            let dialog_item = item.clone();
                            view! {
                                <div class="product-details-body">
                                    {item
                                        .images
                                        .first()
                                        .cloned()
                                        .map(|src| view! { <img src=src alt=item.name.clone() /> })}
                                    <h1>{item.name.clone()}</h1>
                                    <p class="product-price">{format!("₹{}", item.price)}</p>
                                    <p class="product-stock">
                                        {i18n.t("product.stock")} ": " {item.stock}
                                    </p>
                                    <p class="product-min-order">
                                        {i18n.t("product.minOrder")} ": "
                                        {item.minimum_order_quantity}
                                    </p>
                                    <h2>{i18n.t("product.description")}</h2>
                                    <p>{item.description.clone()}</p>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| order_open.set(true)
                                    >
                                        {i18n.t("product.orderNow")}
                                    </Button>
                                    <OrderNowDialog open=order_open product=dialog_item />
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! { <p class="empty-state">{i18n.t("products.empty")}</p> }
                                .into_any()
                        }
                    })
            }}
        </section>
    }
}

/// Channel chooser: website checkout or a prefilled WhatsApp chat
#[component]
fn OrderNowDialog(open: RwSignal<bool>, product: Product) -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();

    let checkout_href = format!("/checkout/{}", product.id);
    let message = whatsapp::order_message(
        &product.name,
        product.price,
        product.minimum_order_quantity,
    );

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || i18n.t("order.title")}</DialogTitle>
                    <DialogContent>
                        <p>{move || i18n.t("order.description")}</p>
                        <div class="order-channel">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    open.set(false);
                                    navigate(&checkout_href, Default::default());
                                }
                            >
                                {move || i18n.t("order.website")}
                            </Button>
                            <p class="order-channel-desc">
                                {move || i18n.t("order.websiteDesc")}
                            </p>
                        </div>
                        <div class="order-channel">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    whatsapp::open_whatsapp_chat(&message);
                                    open.set(false);
                                }
                            >
                                {move || i18n.t("order.whatsapp")}
                            </Button>
                            <p class="order-channel-desc">
                                {move || i18n.t("order.whatsappDesc")}
                            </p>
                        </div>
                        <div class="order-channel">
                            <Button appearance=ButtonAppearance::Subtle disabled=true>
                                {move || i18n.t("order.bulk")}
                            </Button>
                            <p class="order-channel-desc">{move || i18n.t("order.bulkDesc")}</p>
                        </div>
                    </DialogContent>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
