//! Toast notifications.
//!
//! [`ToastProvider`] owns the stack of visible toasts and renders it above
//! the app; [`use_toast`] hands out a [`ToastApi`] anywhere below the
//! provider. Failures surface through `toast.error(..)`; success toasts are
//! opt-in and the auth flows never emit one (navigation implies it).

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Presentation options for a single toast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastOptions {
    /// How long the toast stays visible, in milliseconds.
    pub duration_ms: u64,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self { duration_ms: 4000 }
    }
}

/// Handle for pushing toasts, obtained via [`use_toast`].
#[derive(Clone, Copy)]
pub struct ToastApi {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

/// Get the toast handle provided by the nearest [`ToastProvider`].
pub fn use_toast() -> ToastApi {
    use_context::<ToastApi>()
}

impl ToastApi {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Error, message, options);
    }

    fn push(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;

        let id = next_id();
        next_id.set(id + 1);
        toasts.write().push(Toast { id, kind, message });

        spawn(async move {
            sleep_ms(options.duration_ms).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }
}

async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

fn toast_icon(kind: ToastKind) -> Element {
    match kind {
        ToastKind::Success => rsx! {
            Icon { icon: FaCircleCheck, width: 16, height: 16 }
        },
        ToastKind::Error => rsx! {
            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
        },
    }
}

/// Provider component that renders the toast stack over its children.
/// Wrap your app with this component to enable notifications.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| ToastApi { toasts, next_id });

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.kind),
                    {toast_icon(toast.kind)}
                    span { class: "toast__message", "{toast.message}" }
                }
            }
        }
    }
}
