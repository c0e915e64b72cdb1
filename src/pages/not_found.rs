//! 404 fallback page.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"404"</h1>
            <p>"Sorry, the page you are looking for does not exist."</p>
            <a href="/" class="btn btn--primary">"Go Home"</a>
        </div>
    }
}
