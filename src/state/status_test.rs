use super::*;

// =============================================================
// Badge lookup
// =============================================================

#[test]
fn known_statuses_map_to_their_badges() {
    assert_eq!(status_badge_class("APPROVED"), "badge badge--approved");
    assert_eq!(status_badge_class("PENDING"), "badge badge--pending");
    assert_eq!(status_badge_class("REJECTED"), "badge badge--rejected");
}

#[test]
fn unrecognized_status_falls_back_to_default_badge() {
    assert_eq!(status_badge_class("VERIFIED"), "badge badge--default");
    assert_eq!(status_badge_class("banana"), "badge badge--default");
    assert_eq!(status_badge_class(""), "badge badge--default");
}

// =============================================================
// Action tables
// =============================================================

#[test]
fn actions_map_to_target_statuses() {
    assert_eq!(CardAction::Verify.target_status(), "VERIFIED");
    assert_eq!(CardAction::Reject.target_status(), "REJECTED");
    assert_eq!(CardAction::Accept.target_status(), "APPROVED");
}

#[test]
fn roles_offer_their_own_actions() {
    assert_eq!(
        CardAction::for_role(Role::Verifier),
        &[CardAction::Verify, CardAction::Reject]
    );
    assert_eq!(
        CardAction::for_role(Role::Admin),
        &[CardAction::Accept, CardAction::Reject]
    );
}

#[test]
fn action_labels() {
    assert_eq!(CardAction::Verify.label(), "Verify");
    assert_eq!(CardAction::Reject.label(), "Reject");
    assert_eq!(CardAction::Accept.label(), "Accept");
}
