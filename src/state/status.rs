//! Status badge styling and the role-specific card actions.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::Role;

/// CSS class for a status badge.
///
/// Statuses the server may return but that have no dedicated color
/// (VERIFIED included) fall back to the default badge.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "APPROVED" => "badge badge--approved",
        "PENDING" => "badge badge--pending",
        "REJECTED" => "badge badge--rejected",
        _ => "badge badge--default",
    }
}

/// A status-transition action offered from a loan card's menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Verify,
    Reject,
    Accept,
}

impl CardAction {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            CardAction::Verify => "Verify",
            CardAction::Reject => "Reject",
            CardAction::Accept => "Accept",
        }
    }

    /// Status requested from the server when the action is selected.
    /// The client enforces no transition graph; the server decides.
    pub fn target_status(self) -> &'static str {
        match self {
            CardAction::Verify => "VERIFIED",
            CardAction::Reject => "REJECTED",
            CardAction::Accept => "APPROVED",
        }
    }

    /// Actions offered to each reviewer role.
    pub fn for_role(role: Role) -> &'static [CardAction] {
        match role {
            Role::Verifier => &[CardAction::Verify, CardAction::Reject],
            Role::Admin => &[CardAction::Accept, CardAction::Reject],
        }
    }
}
