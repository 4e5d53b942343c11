//! Small presentation helpers shared by every page

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state">
            <Spinner />
        </div>
    }
}

/// Failure notice for reads; keeps the page alive and offers a retry
#[component]
pub fn ErrorState(
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <p class="error-state-message">{move || message.get()}</p>
            {on_retry.map(|retry| {
                view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| retry.run(())
                    >
                        "Retry"
                    </Button>
                }
            })}
        </div>
    }
}

/// Inline per-field validation message
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|message| view! { <p class="field-error">{message}</p> })
        }}
    }
}
