//! Two-step password reset wizard.
//!
//! Step one requests a reset email; step two (entered when the emailed link
//! carries a `token` query parameter) sets the new password. The password
//! match check happens client-side before any network call.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::toast::{self, ToastState};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = query.get_untracked().get("token").unwrap_or_default();

    view! {
        <div class="card card--narrow card--center">
            <h2 class="card__title">"Reset Password"</h2>
            {if token.is_empty() {
                view! { <RequestForm/> }.into_any()
            } else {
                view! { <ConfirmForm token=token/> }.into_any()
            }}
            <div class="card__links">
                <a href="/login">"Back to Login"</a>
            </div>
        </div>
    }
}

/// Step one: request a reset email.
#[component]
fn RequestForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        notice.set(String::new());
        error.set(String::new());
        pending.set(true);

        leptos::task::spawn_local(async move {
            let result = crate::net::users::request_password_reset(&email.get_untracked()).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    notice.set("Password reset email sent! Check your inbox.".to_owned());
                    toast::success(toasts, "Reset email sent!");
                }
                Err(_) => {
                    error.set("Failed to send reset email.".to_owned());
                    toast::error(toasts, "Failed to send reset email");
                }
            }
        });
    };

    view! {
        <form on:submit=submit>
            <label class="form__label">
                "Email"
                <input
                    class="form__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !error.get().is_empty()>
                <div class="form__error">{move || error.get()}</div>
            </Show>
            <Show when=move || !notice.get().is_empty()>
                <div class="form__success">{move || notice.get()}</div>
            </Show>
            <button type="submit" class="btn btn--primary btn--block" disabled=move || pending.get()>
                "Send Reset Email"
            </button>
        </form>
    }
}

/// Step two: set the new password with the emailed token.
#[component]
fn ConfirmForm(token: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let new_password = password.get_untracked();
        let confirm = password_confirm.get_untracked();
        if new_password != confirm {
            error.set("Passwords do not match.".to_owned());
            return;
        }
        error.set(String::new());
        pending.set(true);

        let token = token.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result =
                crate::net::users::confirm_password_reset(&token, &new_password, &confirm).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    toast::success(toasts, "Password reset! You can now log in.");
                    navigate("/login", NavigateOptions::default());
                }
                Err(_) => {
                    error.set("Failed to reset password.".to_owned());
                    toast::error(toasts, "Failed to reset password");
                }
            }
        });
    };

    view! {
        <form on:submit=submit>
            <label class="form__label">
                "New Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Confirm New Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password_confirm.get()
                    on:input=move |ev| password_confirm.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !error.get().is_empty()>
                <div class="form__error">{move || error.get()}</div>
            </Show>
            <button type="submit" class="btn btn--primary btn--block" disabled=move || pending.get()>
                "Reset Password"
            </button>
        </form>
    }
}
