//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::footer::Footer;
use crate::components::guard::{RequireAdmin, RequireAuth};
use crate::components::navbar::Navbar;
use crate::components::toaster::Toaster;
use crate::pages::admin::AdminDashboardPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
/// The session is restored from durable storage before the first render, so
/// route guards never see a "loading" state distinct from "signed out".
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::load());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    view! {
        <Title text="JobTrack"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__main">
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                        <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                        <Route
                            path=StaticSegment("dashboard")
                            view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("profile")
                            view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("admin")
                            view=|| view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
                        />
                    </Routes>
                </main>
                <Footer/>
                <Toaster/>
            </div>
        </Router>
    }
}
