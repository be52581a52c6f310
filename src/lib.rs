//! # credit-app
//!
//! Leptos + WASM frontend for a loan-application workflow. Borrowers apply
//! for loans from the public page, while verifiers and admins review
//! applications and move them through the status lifecycle from their
//! dashboards.
//!
//! This crate contains pages, components, view state, and the REST client
//! for the remote loan API. All persistence and business rules live behind
//! that API; the client only fetches, maps, and renders.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
