//! Modal form for submitting a new loan application.

use leptos::prelude::*;

use crate::net::api;
use crate::state::form::ApplicationForm;

/// Modal dialog over the six application fields.
///
/// Submission posts the current values verbatim; success and failure are
/// both reported through a browser alert, matching the rest of the app's
/// bare-bones error surface. The backdrop and the close button dismiss
/// without submitting.
#[component]
pub fn ApplicationFormModal(on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(ApplicationForm::default());

    let submit = move || {
        let body = form.get().to_request();
        leptos::task::spawn_local(async move {
            match api::submit_application(&body).await {
                Ok(()) => {
                    alert("Loan application submitted successfully!");
                    on_close.run(());
                }
                Err(err) => {
                    log::error!("failed to submit loan application: {err}");
                    alert("Failed to submit the loan application.");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" on:click=move |_| on_close.run(())>
                    "\u{2715}"
                </button>
                <form
                    class="application-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <h2 class="application-form__title">"APPLY FOR A LOAN"</h2>

                    <div class="application-form__row">
                        <input
                            type="text"
                            placeholder="Full name as it appears on bank account"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| {
                                form.update(|f| f.full_name = event_target_value(&ev));
                            }
                        />
                        <input
                            type="number"
                            placeholder="How much do you need?"
                            prop:value=move || form.get().loan_amount
                            on:input=move |ev| {
                                form.update(|f| f.loan_amount = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="application-form__row">
                        <input
                            type="number"
                            placeholder="Loan tenure (in months)"
                            prop:value=move || form.get().loan_tenure
                            on:input=move |ev| {
                                form.update(|f| f.loan_tenure = event_target_value(&ev));
                            }
                        />
                        <input
                            type="text"
                            placeholder="Employment status"
                            prop:value=move || form.get().employment_status
                            on:input=move |ev| {
                                form.update(|f| f.employment_status = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="application-form__row">
                        <textarea
                            placeholder="Reason for loan"
                            prop:value=move || form.get().reason_for_loan
                            on:input=move |ev| {
                                form.update(|f| f.reason_for_loan = event_target_value(&ev));
                            }
                        ></textarea>
                        <input
                            type="text"
                            placeholder="Employment address"
                            prop:value=move || form.get().employment_address
                            on:input=move |ev| {
                                form.update(|f| f.employment_address = event_target_value(&ev));
                            }
                        />
                    </div>

                    <button type="submit" class="btn btn--primary application-form__submit">
                        "Submit Loan Application"
                    </button>
                </form>
            </div>
        </div>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
