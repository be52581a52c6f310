//! Controlled model for the loan application form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::LoanApplication;

/// Current values of the six application fields, bound to the modal's
/// inputs. No validation beyond the HTML input types; the values are
/// posted verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub loan_amount: String,
    pub loan_tenure: String,
    pub employment_status: String,
    pub reason_for_loan: String,
    pub employment_address: String,
}

impl ApplicationForm {
    /// Build the POST body from the current field values.
    pub fn to_request(&self) -> LoanApplication {
        LoanApplication {
            full_name: self.full_name.clone(),
            loan_amount: self.loan_amount.clone(),
            loan_tenure: self.loan_tenure.clone(),
            employment_status: self.employment_status.clone(),
            reason_for_loan: self.reason_for_loan.clone(),
            employment_address: self.employment_address.clone(),
        }
    }
}
