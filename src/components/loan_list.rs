//! Loan list bound to one endpoint, selected by variant.

use leptos::prelude::*;

use crate::components::loan_card::LoanCard;
use crate::state::loans::ListVariant;

/// Fetches the variant's loans once on mount and renders one card per
/// record. Rendering precedence: loading, then error, then the empty
/// state, then the cards. No retry and no cache; navigating back to the
/// list refetches.
#[component]
pub fn LoanList(variant: ListVariant) -> impl IntoView {
    let loans = LocalResource::new(move || variant.fetch());
    let role = variant.role();

    view! {
        <div class="loan-list">
            <Suspense fallback=move || {
                view! { <p class="loan-list__loading">"Loading loans, please wait..."</p> }
            }>
                {move || {
                    loans
                        .get()
                        .map(|result| match result {
                            Err(err) => {
                                view! {
                                    <p class="loan-list__error">{format!("Error: {err}")}</p>
                                }
                                    .into_any()
                            }
                            Ok(list) if list.is_empty() => {
                                view! { <p class="loan-list__empty">"No loans found"</p> }
                                    .into_any()
                            }
                            Ok(list) => {
                                list.into_iter()
                                    .map(|loan| view! { <LoanCard loan=loan role=role/> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
