//! Toast notifications: a fire-and-forget handle and the renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`ToastHandle`] through context. Pages call
//! [`ToastHandle::success`] and forget about it; [`Toaster`] renders whatever
//! is queued and each toast removes itself after its duration.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Command handle for showing toasts. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    toasts: RwSignal<ToastState>,
    duration_ms: u32,
}

impl ToastHandle {
    pub fn new(toasts: RwSignal<ToastState>, duration_ms: u32) -> Self {
        Self { toasts, duration_ms }
    }

    pub fn toasts(&self) -> RwSignal<ToastState> {
        self.toasts
    }

    /// Show a success toast.
    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        let duration_ms = self.duration_ms;
        // A disposed signal means the app is gone; nothing left to notify.
        let Some(id) = self.toasts.try_update(|t| t.push(message, duration_ms)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        if duration_ms > 0 {
            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(duration_ms, move || {
                let _ = toasts.try_update(|t| t.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

/// Renders queued toasts; clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<ToastHandle>().toasts();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast toast--success"
                            role="status"
                            on:click=move |_| {
                                toasts.update(|t| {
                                    t.dismiss(id);
                                });
                            }
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
