//! Currency and date formatting for loan display records.
//!
//! Matches the backend's locale conventions: rupee amounts with Indian
//! digit grouping (last three digits, then groups of two) and long-form
//! en-IN dates like `15 March 2024`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

/// Format an amount as an Indian-grouped rupee string with two decimals,
/// e.g. `₹12,34,567.89`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    // Round to paise first so 99.999 carries into the whole part.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = group_indian(paise / 100);
    let frac = paise % 100;
    let sign = if negative { "-" } else { "" };
    format!("{sign}\u{20b9}{whole}.{frac:02}")
}

/// Group a whole number Indian-style: `1234567` -> `12,34,567`.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Render an RFC 3339 timestamp as `15 March 2024`.
///
/// Unparseable input is shown as-is rather than hiding the record.
pub fn format_date(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%-d %B %Y").to_string(),
        Err(_) => rfc3339.to_owned(),
    }
}
