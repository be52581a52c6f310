use super::*;

// =============================================================
// LoanRecord deserialization
// =============================================================

#[test]
fn loan_record_reads_backend_field_names() {
    let raw = serde_json::json!({
        "_id": "65f1c0ffee",
        "fullName": "Ada Obi",
        "loanOfficer": "John Okoh",
        "loanAmount": 50000.0,
        "reasonForLoan": "School fees",
        "createdAt": "2024-03-15T10:30:00.000Z",
        "status": "PENDING"
    });

    let rec: LoanRecord = serde_json::from_value(raw).unwrap();
    assert_eq!(rec.id, "65f1c0ffee");
    assert_eq!(rec.full_name, "Ada Obi");
    assert_eq!(rec.loan_officer, "John Okoh");
    assert!((rec.loan_amount - 50000.0).abs() < f64::EPSILON);
    assert_eq!(rec.reason_for_loan, "School fees");
    assert_eq!(rec.status, "PENDING");
}

#[test]
fn loan_record_defaults_missing_display_fields() {
    let raw = serde_json::json!({ "_id": "abc" });
    let rec: LoanRecord = serde_json::from_value(raw).unwrap();
    assert_eq!(rec.id, "abc");
    assert!(rec.loan_officer.is_empty());
    assert!(rec.status.is_empty());
    assert_eq!(rec.loan_amount, 0.0);
}

#[test]
fn loan_summary_reads_misspelled_disbursed_field() {
    let raw = serde_json::json!({
        "borrowUserCount": 12,
        "activeUserCount": 34,
        "approvedLoanCount": 56,
        "totalDisbursedloanAmount": 789000.0
    });

    let summary: LoanSummary = serde_json::from_value(raw).unwrap();
    assert_eq!(summary.borrow_user_count, 12);
    assert_eq!(summary.active_user_count, 34);
    assert_eq!(summary.approved_loan_count, 56);
    assert!((summary.total_disbursed_loan_amount - 789000.0).abs() < f64::EPSILON);
}

// =============================================================
// LoanApplication serialization
// =============================================================

#[test]
fn loan_application_serializes_camel_case_verbatim() {
    let app = LoanApplication {
        full_name: "Ada Obi".to_owned(),
        loan_amount: "250000".to_owned(),
        loan_tenure: "12".to_owned(),
        employment_status: "Employed".to_owned(),
        reason_for_loan: "Working capital".to_owned(),
        employment_address: "14 Marina Rd, Lagos".to_owned(),
    };

    let body = serde_json::to_value(&app).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "fullName": "Ada Obi",
            "loanAmount": "250000",
            "loanTenure": "12",
            "employmentStatus": "Employed",
            "reasonForLoan": "Working capital",
            "employmentAddress": "14 Marina Rd, Lagos"
        })
    );
}

// =============================================================
// StatusUpdate bodies
// =============================================================

#[test]
fn verifier_update_carries_assigned_officer() {
    let body = serde_json::to_value(StatusUpdate::for_role(Role::Verifier, "REJECTED")).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "status": "REJECTED", "loanOfficer": "Jon Okoh" })
    );
}

#[test]
fn admin_update_omits_officer_field() {
    let body = serde_json::to_value(StatusUpdate::for_role(Role::Admin, "APPROVED")).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "APPROVED" }));
}

#[test]
fn role_endpoints_and_query_values() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Verifier.as_str(), "verifier");
    assert_eq!(Role::Admin.status_endpoint(), "status-admin");
    assert_eq!(Role::Verifier.status_endpoint(), "status-verifier");
}
