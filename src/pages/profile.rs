//! Profile page: update name fields and change password.

use leptos::prelude::*;

use crate::net::types::User;
use crate::net::users::{PasswordChange, ProfileUpdate};
use crate::state::toast::{self, ToastState};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let profile = LocalResource::new(move || async move {
        match crate::net::users::profile().await {
            Ok(user) => Some(user),
            Err(err) => {
                leptos::logging::warn!("profile fetch failed: {err}");
                toast::error(toasts, "Failed to load profile");
                None
            }
        }
    });

    view! {
        <div class="card">
            <h2 class="card__title">"Profile"</h2>
            <Suspense fallback=|| view! { <p class="card__muted">"Loading..."</p> }>
                {move || {
                    profile
                        .get()
                        .flatten()
                        .map(|user| view! { <NameForm user=user/> })
                }}
            </Suspense>
            <PasswordForm/>
        </div>
    }
}

/// Update first/last name; the email is shown read-only.
#[component]
fn NameForm(user: User) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = user.email.clone();
    let form = RwSignal::new(ProfileUpdate {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    });
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let update = form.get_untracked();
        leptos::task::spawn_local(async move {
            let result = crate::net::users::update_profile(&update).await;
            pending.set(false);
            match result {
                Ok(_) => toast::success(toasts, "Profile updated"),
                Err(err) => toast::error(toasts, err.to_string()),
            }
        });
    };

    view! {
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
                <input class="form__input" type="email" prop:value=email disabled=true/>
            </label>
            <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                {move || if pending.get() { "Saving..." } else { "Save Changes" }}
            </button>
        </form>
    }
}

/// Change password; the new password is confirm-checked before the request.
#[component]
fn PasswordForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(PasswordChange::default());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let change = form.get_untracked();
        if change.new_password != change.new_password_confirm {
            error.set("Passwords do not match.".to_owned());
            return;
        }
        error.set(String::new());
        pending.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::users::change_password(&change).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    form.set(PasswordChange::default());
                    toast::success(toasts, "Password changed");
                }
                Err(err) => {
                    error.set(err.to_string());
                    toast::error(toasts, "Failed to change password");
                }
            }
        });
    };

    view! {
        <form on:submit=submit class="card__section">
            <h3 class="card__subtitle">"Change Password"</h3>
            <label class="form__label">
                "Current Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || form.get().old_password
                    on:input=move |ev| form.update(|f| f.old_password = event_target_value(&ev))
                />
            </label>
            <div class="form__row">
                <label class="form__label">
                    "New Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || form.get().new_password
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Confirm New Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || form.get().new_password_confirm
                        on:input=move |ev| {
                            form.update(|f| f.new_password_confirm = event_target_value(&ev));
                        }
                    />
                </label>
            </div>
            <Show when=move || !error.get().is_empty()>
                <div class="form__error">{move || error.get()}</div>
            </Show>
            <button type="submit" class="btn" disabled=move || pending.get()>
                {move || if pending.get() { "Changing..." } else { "Change Password" }}
            </button>
        </form>
    }
}
