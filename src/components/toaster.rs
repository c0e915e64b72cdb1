//! Overlay rendering the active toast notifications.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Fixed-position stack of toasts; clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            on:click=move |_| toasts.update(|state| state.dismiss(id))
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
