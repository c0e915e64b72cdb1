//! Email verification landing page.
//!
//! Reads the `token` query parameter from the emailed link and POSTs it to
//! the API exactly once; a missing token is an immediate error without any
//! network call.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::toast::{self, ToastState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VerifyStatus {
    Pending,
    Success,
    Error,
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();

    let status = RwSignal::new(VerifyStatus::Pending);
    let message = RwSignal::new(String::new());

    Effect::new(move || {
        let Some(token) = query.get_untracked().get("token") else {
            status.set(VerifyStatus::Error);
            message.set("Invalid verification link.".to_owned());
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::users::verify_email(&token).await {
                Ok(()) => {
                    status.set(VerifyStatus::Success);
                    message.set("Email verified! You can now log in.".to_owned());
                    toast::success(toasts, "Email verified!");
                }
                Err(_) => {
                    status.set(VerifyStatus::Error);
                    message.set("Verification failed or link expired.".to_owned());
                    toast::error(toasts, "Verification failed");
                }
            }
        });
    });

    view! {
        <div class="card card--narrow card--center">
            <h2 class="card__title">"Verify Email"</h2>
            {move || match status.get() {
                VerifyStatus::Pending => view! { <p class="card__muted">"Verifying..."</p> }.into_any(),
                VerifyStatus::Success => {
                    view! {
                        <p class="form__success">{message.get()}</p>
                        <a href="/login">"Go to Login"</a>
                    }
                        .into_any()
                }
                VerifyStatus::Error => {
                    view! {
                        <p class="form__error">{message.get()}</p>
                        <a href="/register">"Register"</a>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
