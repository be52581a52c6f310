//! Reusable view components.

pub mod application_form;
pub mod loan_card;
pub mod loan_list;
pub mod navbar;
pub mod sidebar;
pub mod stat_card;
