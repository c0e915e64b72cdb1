//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            "© JobTrack. All rights reserved."
        </footer>
    }
}
