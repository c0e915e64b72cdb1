//! Transient toast notifications.
//!
//! Every request failure surfaces here as a short-lived message; the
//! triggering view keeps its pre-request state. In the browser a toast
//! dismisses itself after a few seconds; it can also be clicked away.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
const DISPLAY_MILLIS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Notification queue. Ids increase monotonically so a delayed dismissal
/// never removes a newer toast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Show a success toast.
pub fn success(state: RwSignal<ToastState>, message: impl Into<String>) {
    show(state, ToastKind::Success, message.into());
}

/// Show an error toast.
pub fn error(state: RwSignal<ToastState>, message: impl Into<String>) {
    show(state, ToastKind::Error, message.into());
}

fn show(state: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let id = state.try_update(|s| s.push(kind, message));

    #[cfg(target_arch = "wasm32")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DISPLAY_MILLIS)).await;
            state.update(|s| s.dismiss(id));
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}
