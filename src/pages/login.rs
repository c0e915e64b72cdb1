//! Email + password sign-in form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Session};
use crate::state::toast::{self, ToastState};

/// Sign-in page. On success the session is stored and the user is routed to
/// `/admin` (admins) or `/dashboard` (everyone else).
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(String::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result =
                crate::net::auth::login(&email.get_untracked(), &password.get_untracked()).await;
            pending.set(false);
            match result {
                Ok(resp) => {
                    let route = session::landing_route(&resp.user);
                    session::login(session, resp.user, resp.access, resp.refresh);
                    toast::success(toasts, "Welcome back!");
                    navigate(route, NavigateOptions::default());
                }
                Err(err) => {
                    error.set(err.to_string());
                    toast::error(toasts, "Login failed");
                }
            }
        });
    };

    view! {
        <div class="card card--narrow">
            <h2 class="card__title">"Sign In"</h2>
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
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !error.get().is_empty()>
                    <div class="form__error">{move || error.get()}</div>
                </Show>
                <button type="submit" class="btn btn--primary btn--block" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <div class="card__links">
                <a href="/reset-password">"Forgot password?"</a>
                <a href="/register">"Create account"</a>
            </div>
        </div>
    }
}
