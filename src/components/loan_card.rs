//! Single loan row with status badge and role-specific actions.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::net::api;
use crate::net::types::Role;
use crate::state::loans::LoanDisplay;
use crate::state::status::{CardAction, status_badge_class};

/// One loan card.
///
/// The displayed status starts from the fetched record and is replaced
/// only when a status-update request succeeds; other views of the same
/// loan are not told about the change. A failed update is logged and the
/// badge stays as it was.
#[component]
pub fn LoanCard(loan: LoanDisplay, role: Option<Role>) -> impl IntoView {
    let status = RwSignal::new(loan.status);
    let menu_open = RwSignal::new(false);
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    // Stored so the per-action click handlers stay `Copy`.
    let loan_id = StoredValue::new(loan.id);
    let avatar_url = format!("https://i.pravatar.cc/40?u={}", loan.officer);

    // Close the action menu on any press outside its container.
    let outside_listener = window_event_listener(leptos::ev::mousedown, move |ev| {
        let Some(container) = menu_ref.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !container.contains(target.as_ref()) {
            menu_open.set(false);
        }
    });
    on_cleanup(move || outside_listener.remove());

    let run_action = move |action: CardAction| {
        menu_open.set(false);
        let Some(role) = role else {
            return;
        };
        let id = loan_id.get_value();
        leptos::task::spawn_local(async move {
            match api::update_status(role, &id, action.target_status()).await {
                Ok(()) => status.set(action.target_status().to_owned()),
                Err(err) => log::error!("failed to update loan status: {err}"),
            }
        });
    };

    view! {
        <div class="loan-card">
            <div class="loan-card__officer">
                <img class="loan-card__avatar" src=avatar_url alt=loan.officer.clone()/>
                <div>
                    <h3 class="loan-card__officer-name">{loan.officer}</h3>
                    <p class="loan-card__updated">"Updated 1 day ago"</p>
                </div>
            </div>
            <div class="loan-card__amount">{loan.amount}</div>
            <div class="loan-card__date">{loan.date}</div>
            <span class=move || status_badge_class(&status.get())>{move || status.get()}</span>

            {role
                .map(|role| {
                    view! {
                        <div class="loan-card__menu" node_ref=menu_ref>
                            <button
                                class="loan-card__menu-toggle"
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                "\u{22ee}"
                            </button>
                            <Show when=move || menu_open.get()>
                                <ul class="loan-card__actions">
                                    {CardAction::for_role(role)
                                        .iter()
                                        .map(|&action| {
                                            view! {
                                                <li
                                                    class="loan-card__action"
                                                    on:click=move |_| run_action(action)
                                                >
                                                    {action.label()}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </Show>
                        </div>
                    }
                })}
        </div>
    }
}
