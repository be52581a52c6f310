//! Single labeled statistic tile for the dashboards.

use leptos::prelude::*;

use crate::state::summary::StatTile;

#[component]
pub fn StatCard(tile: StatTile) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h4 class="stat-card__label">{tile.label}</h4>
            <p class="stat-card__value">{tile.value}</p>
        </div>
    }
}
