//! Route guards gating pages on session contents.
//!
//! Both guards are pure predicates over the current [`Session`], re-evaluated
//! on every render; nothing is cached. An uninitialized session counts as
//! unauthenticated, so an unsatisfied guard always redirects to `/login`.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Renders its children only for signed-in users, redirecting everyone else
/// to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(children, Session::is_authenticated)
}

/// Renders its children only for signed-in admins, redirecting everyone else
/// to `/login`.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(children, Session::is_admin)
}

fn guarded(children: ChildrenFn, allows: fn(&Session) -> bool) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !allows(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || {
        if allows(&session.get()) {
            Either::Left(children())
        } else {
            Either::Right(())
        }
    }
}
