use super::*;

// =============================================================
// Indian rupee grouping
// =============================================================

#[test]
fn inr_small_amounts_have_no_grouping() {
    assert_eq!(format_inr(0.0), "₹0.00");
    assert_eq!(format_inr(999.0), "₹999.00");
}

#[test]
fn inr_groups_last_three_then_pairs() {
    assert_eq!(format_inr(1_000.0), "₹1,000.00");
    assert_eq!(format_inr(50_000.0), "₹50,000.00");
    assert_eq!(format_inr(100_000.0), "₹1,00,000.00");
    assert_eq!(format_inr(1_234_567.0), "₹12,34,567.00");
    assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789.00");
}

#[test]
fn inr_rounds_to_paise_with_carry() {
    assert_eq!(format_inr(12.345), "₹12.35");
    assert_eq!(format_inr(99.999), "₹100.00");
}

#[test]
fn inr_negative_amounts_keep_sign() {
    assert_eq!(format_inr(-1_234.5), "-₹1,234.50");
}

// =============================================================
// Date formatting
// =============================================================

#[test]
fn date_renders_long_month_form() {
    assert_eq!(format_date("2024-03-15T10:30:00.000Z"), "15 March 2024");
    assert_eq!(format_date("2023-01-02T00:00:00+05:30"), "2 January 2023");
}

#[test]
fn unparseable_date_falls_back_to_input() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}
