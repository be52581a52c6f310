//! Root application component with routing and the shared page chrome.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, home::HomePage,
    verifier_dashboard::VerifierDashboardPage,
};

/// Root application component.
///
/// The navbar is always present; the sidebar is shown only on dashboard
/// routes. Route table:
///
/// - `/` — public borrower view with the application form
/// - `/dashboard` — admin dashboard
/// - `/dashboard/loans` — verifier dashboard
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/styles.css"/>
        <Title text="Credit App"/>

        <Router>
            <Shell/>
        </Router>
    }
}

/// Page chrome around the routed content. Lives inside the `Router` so it
/// can read the current location.
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let on_dashboard = move || location.pathname.get().starts_with("/dashboard");

    view! {
        <div class="app">
            <Navbar/>
            <div class="app__body">
                <Show when=on_dashboard>
                    <Sidebar/>
                </Show>
                <main class="app__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("loans"))
                            view=VerifierDashboardPage
                        />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
