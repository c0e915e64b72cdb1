//! Top navigation bar; links depend on the current session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Session};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"JobTrack"</a>
            <div class="navbar__links">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login" class="navbar__link">"Login"</a>
                            <a href="/register" class="navbar__link">"Register"</a>
                        }
                    }
                >
                    <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                    <a href="/profile" class="navbar__link">"Profile"</a>
                    <Show when=move || session.get().is_admin()>
                        <a href="/admin" class="navbar__link">"Admin"</a>
                    </Show>
                    <button class="btn btn--small" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
