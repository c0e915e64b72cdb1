//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"JobTrack"</h1>
            <p class="home-page__tagline">
                "Track your job applications, manage interviews, and stay organized \
                 through your job search."
            </p>
            <div class="home-page__actions">
                <a href="/register" class="btn btn--primary">"Get Started"</a>
                <a href="/login" class="btn">"Login"</a>
            </div>
        </div>
    }
}
