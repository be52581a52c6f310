//! View-local state and pure mapping logic.
//!
//! DESIGN
//! ======
//! Everything that can be tested without a browser lives here: wire-record
//! to display-record mapping, status/action tables, dashboard tile
//! assembly, and the application form model. Components stay thin views
//! over these functions.

pub mod form;
pub mod loans;
pub mod status;
pub mod summary;
pub mod ui;
