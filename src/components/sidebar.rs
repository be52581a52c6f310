//! Dashboard sidebar with the staff navigation menu.

use leptos::prelude::*;

/// Menu entries. Only Dashboard and Loans have live routes; the rest
/// point at sections the backend does not serve yet.
const MENU_ITEMS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/dashboard/loans", "Loans"),
    ("/dashboard/borrowers", "Borrowers"),
    ("/dashboard/repayments", "Repayments"),
    ("/dashboard/loan-parameters", "Loan Parameters"),
    ("/dashboard/accounting", "Accounting"),
    ("/dashboard/reports", "Reports"),
    ("/dashboard/collateral", "Collateral"),
    ("/dashboard/access-configuration", "Access Configuration"),
    ("/dashboard/savings", "Savings"),
    ("/dashboard/exposures", "Exposures"),
    ("/dashboard/enclosures", "Enclosures"),
    ("/dashboard/investor-accounts", "Investor Accounts"),
    ("/dashboard/calendar", "Calendar"),
    ("/dashboard/settings", "Settings"),
];

/// Sidebar shown on dashboard routes: a static profile header plus the
/// menu list.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__profile">
                <span class="sidebar__avatar">"\u{1f464}"</span>
                <span class="sidebar__name">"John Doe"</span>
            </div>
            <nav class="sidebar__menu">
                {MENU_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="sidebar__item" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
