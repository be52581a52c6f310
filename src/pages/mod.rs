//! Routed pages.

pub mod admin_dashboard;
pub mod home;
pub mod verifier_dashboard;
