//! Transient user notifications
//!
//! Mutations report success or failure here; failure messages come from the
//! remote service verbatim when available.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Service for raising transient notifications, provided at the app root
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn provide() -> Self {
        let service = Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        };
        provide_context(service);
        service
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the active notifications in a fixed corner stack
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toasts();
    let toasts = service.toasts;

    view! {
        <div class="toaster">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <div
                    class=match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    }
                    on:click=move |_| service.dismiss(toast.id)
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
