//! Account registration form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::users::RegisterPayload;
use crate::state::toast::{self, ToastState};

/// Client-side check before the request; the API performs the real
/// validation and its field errors are surfaced on failure.
fn validation_error(form: &RegisterPayload) -> Option<String> {
    if form.first_name.trim().is_empty()
        || form.last_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
    {
        return Some("All fields are required.".to_owned());
    }
    if form.password != form.password_confirm {
        return Some("Passwords do not match.".to_owned());
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterPayload::default());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = form.get_untracked();
        if let Some(message) = validation_error(&payload) {
            error.set(message);
            return;
        }
        error.set(String::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::users::register(&payload).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    toast::success(toasts, "Registration successful! Check your email.");
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => {
                    error.set(err.to_string());
                    toast::error(toasts, "Registration failed");
                }
            }
        });
    };

    view! {
        <div class="card card--narrow">
            <h2 class="card__title">"Create Account"</h2>
            <form on:submit=submit>
                <div class="form__row">
                    <label class="form__label">
                        "First Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || form.get().first_name
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Last Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || form.get().last_name
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Confirm Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || form.get().password_confirm
                        on:input=move |ev| {
                            form.update(|f| f.password_confirm = event_target_value(&ev));
                        }
                    />
                </label>
                <Show when=move || !error.get().is_empty()>
                    <div class="form__error">{move || error.get()}</div>
                </Show>
                <button type="submit" class="btn btn--primary btn--block" disabled=move || pending.get()>
                    {move || if pending.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <div class="card__links">
                <a href="/login">"Already have an account?"</a>
            </div>
        </div>
    }
}
