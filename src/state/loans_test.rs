use super::*;
use crate::net::types::Role;

fn sample_record() -> LoanRecord {
    serde_json::from_value(serde_json::json!({
        "_id": "65f1c0ffee",
        "fullName": "Ada Obi",
        "loanOfficer": "John Okoh",
        "loanAmount": 123456.0,
        "reasonForLoan": "School fees",
        "createdAt": "2024-03-15T10:30:00.000Z",
        "status": "PENDING"
    }))
    .unwrap()
}

// =============================================================
// Borrower mapping
// =============================================================

#[test]
fn borrower_rows_format_amount_and_date() {
    let rows = ListVariant::Borrower.map(&[sample_record()]);
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.id, "65f1c0ffee");
    assert_eq!(row.officer, "John Okoh");
    assert_eq!(row.amount, "₹1,23,456.00");
    assert_eq!(row.date, "15 March 2024");
    assert_eq!(row.status, "PENDING");
}

// =============================================================
// Review mapping (admin and verifier share it)
// =============================================================

#[test]
fn review_rows_show_reason_and_applicant() {
    for variant in [ListVariant::Admin, ListVariant::Verifier] {
        let rows = variant.map(&[sample_record()]);
        let row = &rows[0];
        assert_eq!(row.officer, "School fees");
        assert_eq!(row.amount, "Ada Obi");
        assert_eq!(row.date, "15 March 2024");
        assert_eq!(row.status, "PENDING");
    }
}

#[test]
fn mapping_yields_one_row_per_record() {
    let records = vec![sample_record(), sample_record(), sample_record()];
    assert_eq!(ListVariant::Admin.map(&records).len(), 3);
    assert!(ListVariant::Borrower.map(&[]).is_empty());
}

// =============================================================
// Variant roles
// =============================================================

#[test]
fn variant_roles() {
    assert_eq!(ListVariant::Borrower.role(), None);
    assert_eq!(ListVariant::Admin.role(), Some(Role::Admin));
    assert_eq!(ListVariant::Verifier.role(), Some(Role::Verifier));
}
