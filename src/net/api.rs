//! REST helpers for the remote loan API.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<T, String>` so callers can surface the
//! message inline (list views) or log it (card actions) without a custom
//! error taxonomy — the only failure mode the UI distinguishes is
//! "request failed".

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::types::{LoanApplication, LoanRecord, LoanSummary, Role, StatusUpdate};

/// Base URL of the remote loan service.
pub const API_BASE: &str = "https://credit-sea-assignment-bck.vercel.app/api";

/// Fixed borrower identifier used by the public view.
pub const BORROWER_ID: u32 = 12_140_970;

/// Fetch the fixed borrower's loans from `GET /loans/id`.
pub async fn fetch_borrower_loans() -> Result<Vec<LoanRecord>, String> {
    let url = format!("{API_BASE}/loans/id?idNumber={BORROWER_ID}");
    get_json(&url).await
}

/// Fetch all loans visible to the given reviewer role.
pub async fn fetch_loans_by_role(role: Role) -> Result<Vec<LoanRecord>, String> {
    let url = format!("{API_BASE}/loans/?role={}", role.as_str());
    get_json(&url).await
}

/// Fetch aggregate summary statistics.
///
/// The endpoint returns a one-element array; callers take `.first()`.
pub async fn fetch_summary() -> Result<Vec<LoanSummary>, String> {
    let url = format!("{API_BASE}/loans/summary");
    get_json(&url).await
}

/// Submit a new loan application via `POST /loans`.
pub async fn submit_application(application: &LoanApplication) -> Result<(), String> {
    let url = format!("{API_BASE}/loans?idNumber={BORROWER_ID}");
    let resp = Request::post(&url)
        .json(application)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("request failed: {}", resp.status()));
    }
    Ok(())
}

/// Request a status transition for one loan via the role's PATCH endpoint.
///
/// The server is the sole arbiter of valid transitions; the client sends
/// whatever status the selected action maps to.
pub async fn update_status(role: Role, loan_id: &str, status: &str) -> Result<(), String> {
    let url = format!("{API_BASE}/loans/{}?_id={loan_id}", role.status_endpoint());
    let resp = Request::patch(&url)
        .json(&StatusUpdate::for_role(role, status))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("request failed: {}", resp.status()));
    }
    Ok(())
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("request failed: {}", resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}
