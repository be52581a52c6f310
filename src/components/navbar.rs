//! Top navigation bar shown on every route.

use leptos::prelude::*;

/// Navbar with the brand and the fixed navigation links. Budget and Card
/// are decorative links back to the home page.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <h1 class="navbar__brand">"CREDIT APP"</h1>
            <div class="navbar__links">
                <a href="/" class="navbar__link">"Home"</a>
                <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                <a href="/" class="navbar__link">"Budget"</a>
                <a href="/" class="navbar__link">"Card"</a>
            </div>
        </nav>
    }
}
