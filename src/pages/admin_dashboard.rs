//! Admin dashboard: stat tiles over the admin loan list.

use leptos::prelude::*;

use crate::components::loan_list::LoanList;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::state::loans::ListVariant;
use crate::state::summary::admin_tiles;

/// Admin dashboard page.
///
/// The tiles render immediately with zeros and fill in when the summary
/// arrives; a failed summary fetch leaves the zeros in place rather than
/// replacing the page.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let summary = LocalResource::new(|| api::fetch_summary());

    let tiles = move || {
        let data = summary.get().and_then(Result::ok);
        admin_tiles(data.as_ref().and_then(|list| list.first()))
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__stats dashboard-page__stats--four">
                {move || {
                    tiles()
                        .into_iter()
                        .map(|tile| view! { <StatCard tile=tile/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="loan-table-header loan-table-header--review">
                <div>"User Details"</div>
                <div>"Customer Name"</div>
                <div>"Date"</div>
                <div>"Status"</div>
                <div>"Action"</div>
            </div>
            <LoanList variant=ListVariant::Admin/>
        </div>
    }
}
