//! Checkout form for the website ordering channel
//!
//! Validation happens entirely client-side before the RPC; a successful
//! order raises a toast and navigates back to the catalog.

use contracts::domain::{compute_total, CustomerOrderInput};
use contracts::shared::validation::{
    validate_mobile, validate_pincode, validate_quantity, validate_required,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::orders::hooks::place_order;
use crate::domain::products::hooks::use_product;
use crate::i18n::use_i18n;
use crate::shared::client::use_client;
use crate::shared::components::{ErrorState, FieldError, LoadingState};
use crate::shared::toast::use_toasts;

/// Per-field validation results for the checkout form; any `Some` blocks submit
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckoutFieldErrors {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub quantity: Option<String>,
}

impl CheckoutFieldErrors {
    pub fn any(&self) -> bool {
        self.name.is_some()
            || self.mobile.is_some()
            || self.address.is_some()
            || self.city.is_some()
            || self.state.is_some()
            || self.pincode.is_some()
            || self.quantity.is_some()
    }
}

#[allow(clippy::too_many_arguments)]
pub fn validate_checkout(
    name: &str,
    mobile: &str,
    address: &str,
    city: &str,
    state: &str,
    pincode: &str,
    quantity: u64,
    minimum_order_quantity: u64,
) -> CheckoutFieldErrors {
    CheckoutFieldErrors {
        name: validate_required(name, "Full Name"),
        mobile: validate_mobile(mobile),
        address: validate_required(address, "Address"),
        city: validate_required(city, "City"),
        state: validate_required(state, "State"),
        pincode: validate_pincode(pincode),
        quantity: validate_quantity(quantity, minimum_order_quantity),
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let i18n = use_i18n();
    let params = use_params_map();
    let id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    let product = use_product(id);
    let client = use_client();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let pincode = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let mobile_error = RwSignal::new(None::<String>);
    let address_error = RwSignal::new(None::<String>);
    let city_error = RwSignal::new(None::<String>);
    let state_error = RwSignal::new(None::<String>);
    let pincode_error = RwSignal::new(None::<String>);
    let quantity_error = RwSignal::new(None::<String>);

    let submitting = RwSignal::new(false);

    // quantity defaults to the product minimum once it loads
    Effect::new(move |_| {
        if let Some(Some(item)) = product.data.get() {
            if quantity.get_untracked().is_empty() {
                quantity.set(item.minimum_order_quantity.to_string());
            }
        }
    });

    let total = Signal::derive(move || {
        let item = product.data.get().flatten()?;
        let quantity: u64 = quantity.get().parse().ok()?;
        Some(compute_total(item.price, quantity))
    });

    let submit = move |_| {
        let Some(item) = product.data.get_untracked().flatten() else {
            return;
        };

        let quantity_value: u64 = quantity.get_untracked().parse().unwrap_or(0);
        let errors = validate_checkout(
            &name.get_untracked(),
            &mobile.get_untracked(),
            &address.get_untracked(),
            &city.get_untracked(),
            &state.get_untracked(),
            &pincode.get_untracked(),
            quantity_value,
            item.minimum_order_quantity,
        );
        let blocked = errors.any();
        name_error.set(errors.name);
        mobile_error.set(errors.mobile);
        address_error.set(errors.address);
        city_error.set(errors.city);
        state_error.set(errors.state);
        pincode_error.set(errors.pincode);
        quantity_error.set(errors.quantity);
        if blocked {
            return;
        }

        let full_address = format!(
            "{}, {}, {} - {}",
            address.get_untracked(),
            city.get_untracked(),
            state.get_untracked(),
            pincode.get_untracked()
        );
        let input = CustomerOrderInput {
            customer_name: name.get_untracked(),
            customer_mobile: mobile.get_untracked(),
            customer_address: full_address,
            product_id: item.id.clone(),
            quantity: quantity_value,
        };

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let placed = place_order(&client, &toasts, input).await;
            submitting.set(false);
            if placed.is_some() {
                toasts.success(i18n.t("checkout.success"));
                navigate("/products", Default::default());
            }
        });
    };

    view! {
        <section class="checkout-page">
            <h1>{move || i18n.t("checkout.title")}</h1>

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
                    .flatten()
                    .map(|item| {
                        view! {
                            <div class="checkout-summary">
                                <h2>{item.name.clone()}</h2>
                                <p>{format!("₹{}", item.price)}</p>
                                <p>
                                    {i18n.t("product.minOrder")} ": "
                                    {item.minimum_order_quantity}
                                </p>
                            </div>
                        }
                    })
            }}

            <div class="checkout-form">
                <div class="form-field">
                    <label>{move || i18n.t("checkout.name")}</label>
                    <Input value=name />
                    <FieldError error=name_error />
                </div>
                <div class="form-field">
                    <label>{move || i18n.t("checkout.mobile")}</label>
                    <Input value=mobile />
                    <FieldError error=mobile_error />
                </div>
                <div class="form-field">
                    <label>{move || i18n.t("checkout.address")}</label>
                    <Input value=address />
                    <FieldError error=address_error />
                </div>
                <div class="form-field">
                    <label>{move || i18n.t("checkout.city")}</label>
                    <Input value=city />
                    <FieldError error=city_error />
                </div>
                <div class="form-field">
                    <label>{move || i18n.t("checkout.state")}</label>
                    <Input value=state />
                    <FieldError error=state_error />
                </div>
                <div class="form-field">
                    <label>{move || i18n.t("checkout.pincode")}</label>
                    <Input value=pincode />
                    <FieldError error=pincode_error />
                </div>
                <div class="form-field">
                    <label>{move || i18n.t("checkout.quantity")}</label>
                    <Input value=quantity />
                    <FieldError error=quantity_error />
                </div>

                <p class="checkout-total">
                    {move || i18n.t("checkout.total")} ": "
                    {move || total.get().map(|t| format!("₹{}", t)).unwrap_or_default()}
                </p>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submitting
                    on_click=submit
                >
                    {move || i18n.t("checkout.submit")}
                </Button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_and_state_are_required() {
        let errors = validate_checkout("Ravi", "9876543210", "12 Mill Road", "", "", "246701", 5, 5);
        assert_eq!(errors.city.as_deref(), Some("City is required"));
        assert_eq!(errors.state.as_deref(), Some("State is required"));
        assert!(errors.any());
    }

    #[test]
    fn complete_form_passes() {
        let errors = validate_checkout(
            "Ravi",
            "9876543210",
            "12 Mill Road",
            "Najibabad",
            "Uttar Pradesh",
            "246701",
            5,
            5,
        );
        assert_eq!(errors, CheckoutFieldErrors::default());
        assert!(!errors.any());
    }
}
