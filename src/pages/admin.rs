//! Administrative dashboard: system statistics, broadcast messaging, and
//! user activation management.

use leptos::prelude::*;

use crate::net::types::{AdminStats, Role, User};
use crate::state::toast::{self, ToastState};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let stats = LocalResource::new(move || async move {
        match crate::net::admin::dashboard().await {
            Ok(stats) => Some(stats),
            Err(err) => {
                leptos::logging::warn!("admin dashboard failed: {err}");
                toast::error(toasts, "Failed to load admin data");
                None
            }
        }
    });

    let users = LocalResource::new(move || async move {
        match crate::net::admin::users().await {
            Ok(users) => users,
            Err(err) => {
                leptos::logging::warn!("admin user list failed: {err}");
                toast::error(toasts, "Failed to load users");
                Vec::new()
            }
        }
    });

    // Activate or deactivate, then refetch the list so the table reflects
    // the server's view.
    let on_toggle = Callback::new(move |(id, activate): (i64, bool)| {
        leptos::task::spawn_local(async move {
            let result = if activate {
                crate::net::admin::activate(id).await
            } else {
                crate::net::admin::deactivate(id).await
            };
            match result {
                Ok(()) => {
                    let note = if activate { "User activated" } else { "User deactivated" };
                    toast::success(toasts, note);
                    users.refetch();
                }
                Err(err) => toast::error(toasts, err.to_string()),
            }
        });
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin Dashboard"</h1>
                <p class="card__muted">"Manage users and monitor system activity"</p>
            </header>

            <Suspense fallback=|| view! { <p class="card__muted">"Loading admin dashboard..."</p> }>
                {move || {
                    stats
                        .get()
                        .flatten()
                        .map(|stats| view! { <StatCards stats=stats/> })
                }}
            </Suspense>

            <BroadcastForm/>

            <div class="card">
                <h3 class="card__subtitle">"User Management"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Suspense fallback=|| {
                            view! {
                                <tr>
                                    <td colspan="5" class="table__empty">"Loading..."</td>
                                </tr>
                            }
                        }>
                            {move || {
                                users
                                    .get()
                                    .map(|list| {
                                        list.into_iter()
                                            .map(|user| view! { <UserRow user=user on_toggle=on_toggle/> })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Counter cards plus the status/company breakdowns.
#[component]
fn StatCards(stats: AdminStats) -> impl IntoView {
    let status_total: u32 = stats.status_distribution.iter().map(|s| s.count).sum();

    view! {
        <div class="admin-page__cards">
            <div class="stat-card">
                <span class="stat-card__label">"Total Users"</span>
                <span class="stat-card__value">{stats.users.total}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Active Users"</span>
                <span class="stat-card__value">{stats.users.active}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Verified Users"</span>
                <span class="stat-card__value">{stats.users.verified}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Total Applications"</span>
                <span class="stat-card__value">{stats.applications.total}</span>
            </div>
        </div>

        <div class="admin-page__charts">
            <div class="card">
                <h3 class="card__subtitle">"Application Status Distribution"</h3>
                {stats
                    .status_distribution
                    .iter()
                    .map(|entry| {
                        let pct = if status_total == 0 { 0 } else { entry.count * 100 / status_total };
                        view! {
                            <div class="panel__row">
                                <span class=entry.status.badge_class()>{entry.status.label()}</span>
                                <div class="panel__bar-track">
                                    <div
                                        class=format!("panel__bar panel__bar--{}", entry.status.as_str())
                                        style:width=format!("{pct}%")
                                    ></div>
                                </div>
                                <span class="panel__count">{entry.count}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="card">
                <h3 class="card__subtitle">"Top Companies"</h3>
                {stats
                    .top_companies
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="panel__row">
                                <span class="panel__company">{entry.company_name.clone()}</span>
                                <span class="panel__count">{entry.count}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Broadcast a message to every user via the remote API.
#[component]
fn BroadcastForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let body = message.get_untracked();
        if body.trim().is_empty() {
            toast::error(toasts, "Please enter a message");
            return;
        }
        sending.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::admin::broadcast(body.trim()).await;
            sending.set(false);
            match result {
                Ok(resp) => {
                    toast::success(toasts, resp.message);
                    message.set(String::new());
                }
                Err(err) => toast::error(toasts, err.to_string()),
            }
        });
    };

    view! {
        <div class="card">
            <h3 class="card__subtitle">"Send Broadcast Message"</h3>
            <form on:submit=submit>
                <label class="form__label">
                    "Message to all users"
                    <textarea
                        class="form__input"
                        rows=3
                        placeholder="Enter your broadcast message..."
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send Broadcast" }}
                </button>
            </form>
        </div>
    }
}

/// One user row with an activate or deactivate action.
#[component]
fn UserRow(user: User, on_toggle: Callback<(i64, bool)>) -> impl IntoView {
    let id = user.id;
    let is_active = user.is_active;
    let role_class = if user.role == Role::Admin {
        "badge badge--admin"
    } else {
        "badge"
    };
    let (status_class, status_label) = if is_active {
        ("badge badge--offer", "Active")
    } else {
        ("badge badge--rejected", "Inactive")
    };

    view! {
        <tr>
            <td class="table__strong">
                <span class="avatar">{user.initials()}</span>
                {user.full_name()}
            </td>
            <td>{user.email.clone()}</td>
            <td>
                <span class=role_class>
                    {if user.role == Role::Admin { "admin" } else { "user" }}
                </span>
            </td>
            <td>
                <span class=status_class>{status_label}</span>
            </td>
            <td class="table__actions">
                <button
                    class=if is_active { "link-button link-button--danger" } else { "link-button" }
                    on:click=move |_| on_toggle.run((id, !is_active))
                >
                    {if is_active { "Deactivate" } else { "Activate" }}
                </button>
            </td>
        </tr>
    }
}
