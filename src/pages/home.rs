//! Public borrower page: balance header, tabs, applied loans, and the
//! application modal.

use leptos::prelude::*;

use crate::components::application_form::ApplicationFormModal;
use crate::components::loan_list::LoanList;
use crate::state::loans::ListVariant;
use crate::state::ui::HomeTab;

/// Borrower home page.
///
/// Only the Borrow tab has content; Transact and Deposit show a
/// coming-soon placeholder. The search field is decorative, as on the
/// original site.
#[component]
pub fn HomePage() -> impl IntoView {
    let active_tab = RwSignal::new(HomeTab::default());
    let show_form = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_form.set(false));

    view! {
        <div class="home-page">
            <header class="home-page__balance">
                <div class="home-page__deficit">
                    <span class="home-page__deficit-dot"></span>
                    <div>
                        <h3 class="home-page__deficit-label">"Deficit"</h3>
                        <p class="home-page__deficit-value">"\u{20a6} 0.0"</p>
                    </div>
                </div>
                <button class="btn home-page__get-loan" on:click=move |_| show_form.set(true)>
                    "Get A Loan"
                </button>
            </header>

            <div class="home-page__tabs">
                {HomeTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let class = move || {
                            if active_tab.get() == tab {
                                "home-page__tab home-page__tab--active"
                            } else {
                                "home-page__tab"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| active_tab.set(tab)>
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <input class="home-page__search" type="text" placeholder="Search for loans"/>

            <Show
                when=move || active_tab.get() == HomeTab::Borrow
                fallback=|| {
                    view! { <div class="home-page__coming-soon">"Coming Soon"</div> }
                }
            >
                <section class="home-page__loans">
                    <h1 class="home-page__loans-title">"Applied Loans"</h1>
                    <div class="loan-table-header">
                        <div>"Loan Officer"</div>
                        <div>"Amount"</div>
                        <div>"Date Applied"</div>
                        <div>"Status"</div>
                    </div>
                    <LoanList variant=ListVariant::Borrower/>
                </section>
            </Show>

            <Show when=move || show_form.get()>
                <ApplicationFormModal on_close=on_close/>
            </Show>
        </div>
    }
}
