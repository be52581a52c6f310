//! Loan list variants and their wire-to-display mapping.

#[cfg(test)]
#[path = "loans_test.rs"]
mod loans_test;

use crate::net::api;
use crate::net::types::{LoanRecord, Role};
use crate::util::format::{format_date, format_inr};

/// A loan row as the UI renders it. Recomputed from the wire record on
/// every fetch and discarded on unmount; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanDisplay {
    pub id: String,
    pub officer: String,
    pub amount: String,
    pub date: String,
    pub status: String,
}

/// The three list views, each bound to one endpoint and one mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListVariant {
    /// Public view of the fixed borrower's own loans.
    Borrower,
    /// Admin review list with Accept/Reject actions.
    Admin,
    /// Verifier review list with Verify/Reject actions.
    Verifier,
}

impl ListVariant {
    /// Reviewer role for card actions; the borrower view has none.
    pub fn role(self) -> Option<Role> {
        match self {
            ListVariant::Borrower => None,
            ListVariant::Admin => Some(Role::Admin),
            ListVariant::Verifier => Some(Role::Verifier),
        }
    }

    /// Map raw records into display rows for this variant.
    pub fn map(self, records: &[LoanRecord]) -> Vec<LoanDisplay> {
        let map_one = match self {
            ListVariant::Borrower => to_borrower_display,
            ListVariant::Admin | ListVariant::Verifier => to_review_display,
        };
        records.iter().map(map_one).collect()
    }

    /// Fetch this variant's records and map them in one step.
    pub async fn fetch(self) -> Result<Vec<LoanDisplay>, String> {
        let records = match self {
            ListVariant::Borrower => api::fetch_borrower_loans().await?,
            ListVariant::Admin => api::fetch_loans_by_role(Role::Admin).await?,
            ListVariant::Verifier => api::fetch_loans_by_role(Role::Verifier).await?,
        };
        Ok(self.map(&records))
    }
}

/// Borrower rows: officer name and the loan amount as a rupee string.
fn to_borrower_display(rec: &LoanRecord) -> LoanDisplay {
    LoanDisplay {
        id: rec.id.clone(),
        officer: rec.loan_officer.clone(),
        amount: format_inr(rec.loan_amount),
        date: format_date(&rec.created_at),
        status: rec.status.clone(),
    }
}

/// Review rows: the review table reuses the officer/amount columns for
/// the loan reason and the applicant's name.
fn to_review_display(rec: &LoanRecord) -> LoanDisplay {
    LoanDisplay {
        id: rec.id.clone(),
        officer: rec.reason_for_loan.clone(),
        amount: rec.full_name.clone(),
        date: format_date(&rec.created_at),
        status: rec.status.clone(),
    }
}
