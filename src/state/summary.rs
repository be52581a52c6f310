//! Dashboard stat tiles assembled from the summary endpoint.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::net::types::LoanSummary;

/// One labeled statistic tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

impl StatTile {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// The eight admin dashboard tiles.
///
/// Four come from the summary (zero until data arrives); the rest are
/// placeholder figures with no backing endpoint.
pub fn admin_tiles(summary: Option<&LoanSummary>) -> Vec<StatTile> {
    let s = summary.cloned().unwrap_or_default();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let disbursed = s.total_disbursed_loan_amount.round() as u64;
    vec![
        StatTile::new("Active Users", s.active_user_count.to_string()),
        StatTile::new("Loans", s.approved_loan_count.to_string()),
        StatTile::new("Borrowers", s.borrow_user_count.to_string()),
        StatTile::new("Cash Disbursed", disbursed.to_string()),
        StatTile::new("Savings", "450000"),
        StatTile::new("Cash Received", "1000000"),
        StatTile::new("Repaid Loans", "1000000"),
        StatTile::new("Other Accounts", "10"),
    ]
}

/// The six verifier dashboard tiles.
pub fn verifier_tiles(summary: Option<&LoanSummary>) -> Vec<StatTile> {
    let s = summary.cloned().unwrap_or_default();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let disbursed = s.total_disbursed_loan_amount.round() as u64;
    vec![
        StatTile::new("Cash Received", "1,000,000"),
        StatTile::new("Loans", s.approved_loan_count.to_string()),
        StatTile::new("Borrowers", s.borrow_user_count.to_string()),
        StatTile::new("Cash Disbursed", disbursed.to_string()),
        StatTile::new("Savings", "450,000"),
        StatTile::new("Repaid Loans", "30"),
    ]
}
