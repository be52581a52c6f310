//! Wire types for the remote loan API.
//!
//! Field names follow the backend's JSON by convention (`_id`,
//! `loanOfficer`, `totalDisbursedloanAmount`, ...). The backend enforces no
//! schema, so every field the client merely displays is defaulted when
//! absent rather than failing the whole deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A loan record as returned by the list endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub loan_officer: String,
    #[serde(default)]
    pub loan_amount: f64,
    #[serde(default)]
    pub reason_for_loan: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub status: String,
}

/// A new loan application, posted verbatim from the form fields.
///
/// Every field is the raw input string; the server parses amounts and
/// tenures itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub full_name: String,
    pub loan_amount: String,
    pub loan_tenure: String,
    pub employment_status: String,
    pub reason_for_loan: String,
    pub employment_address: String,
}

/// Aggregate counts from the summary endpoint.
///
/// The endpoint returns a one-element array of these.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    #[serde(default)]
    pub borrow_user_count: u64,
    #[serde(default)]
    pub active_user_count: u64,
    #[serde(default)]
    pub approved_loan_count: u64,
    // The backend really does spell it with a lowercase `l`.
    #[serde(rename = "totalDisbursedloanAmount", default)]
    pub total_disbursed_loan_amount: f64,
}

/// Reviewer role selecting which loans are listed and which status
/// endpoint receives transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Verifier,
}

/// Officer name stamped onto verifier status updates.
pub const VERIFIER_OFFICER: &str = "Jon Okoh";

impl Role {
    /// Query-string value for the role-filtered list endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Verifier => "verifier",
        }
    }

    /// Path segment of the role's status-transition endpoint.
    pub fn status_endpoint(self) -> &'static str {
        match self {
            Role::Admin => "status-admin",
            Role::Verifier => "status-verifier",
        }
    }
}

/// PATCH body for a status transition.
///
/// Verifier updates also carry the assigned officer; admin updates omit
/// the field entirely rather than sending null.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate<'a> {
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_officer: Option<&'a str>,
}

impl<'a> StatusUpdate<'a> {
    /// Build the transition body for the given role.
    pub fn for_role(role: Role, status: &'a str) -> Self {
        Self {
            status,
            loan_officer: match role {
                Role::Verifier => Some(VERIFIER_OFFICER),
                Role::Admin => None,
            },
        }
    }
}
