//! Verifier dashboard: stat tiles over the verifier loan list.

use leptos::prelude::*;

use crate::components::loan_list::LoanList;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::state::loans::ListVariant;
use crate::state::summary::verifier_tiles;

/// Verifier dashboard page.
///
/// Unlike the admin page, the whole body is gated on the summary fetch:
/// a loading line while pending and an inline error if it fails.
#[component]
pub fn VerifierDashboardPage() -> impl IntoView {
    let summary = LocalResource::new(|| api::fetch_summary());

    view! {
        <div class="dashboard-page">
            <Suspense fallback=move || {
                view! { <p class="dashboard-page__loading">"Loading..."</p> }
            }>
                {move || {
                    summary
                        .get()
                        .map(|result| match result {
                            Err(err) => {
                                view! {
                                    <p class="dashboard-page__error">{format!("Error: {err}")}</p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                let tiles = verifier_tiles(list.first());
                                view! {
                                    <div class="dashboard-page__stats dashboard-page__stats--three">
                                        {tiles
                                            .into_iter()
                                            .map(|tile| view! { <StatCard tile=tile/> })
                                            .collect::<Vec<_>>()}
                                    </div>

                                    <div class="loan-table-header loan-table-header--review">
                                        <div>"User Recent Activity"</div>
                                        <div>"Customer Name"</div>
                                        <div>"Date"</div>
                                        <div>"Status"</div>
                                        <div>"Action"</div>
                                    </div>
                                    <LoanList variant=ListVariant::Verifier/>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
