//! Hand-written field validation shared by the HTTP handlers.
//!
//! Each function returns `Result<(), CoreError>` so handlers can bubble a
//! `Validation` error straight into a 400 response.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Case statuses the `cases.status` CHECK constraint accepts.
pub const CASE_STATUSES: &[&str] = &["open", "pending", "closed"];

/// Invoice statuses the `invoices.status` CHECK constraint accepts.
pub const INVOICE_STATUSES: &[&str] = &["draft", "sent", "paid", "void"];

/// Require a mandatory text field to be present and non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate email format (RFC 5321 shape, via the `validator` crate).
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "{email:?} is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate that a schedule's time range is well-formed (ends after it starts).
pub fn validate_time_range(starts_at: Timestamp, ends_at: Timestamp) -> Result<(), CoreError> {
    if ends_at <= starts_at {
        return Err(CoreError::Validation(
            "ends_at must be after starts_at".to_string(),
        ));
    }
    Ok(())
}

/// Validate a case status against the known set.
pub fn validate_case_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("status", status, CASE_STATUSES)
}

/// Validate an invoice status against the known set.
pub fn validate_invoice_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("status", status, INVOICE_STATUSES)
}

/// Validate an invoice amount in minor units.
pub fn validate_amount_cents(amount_cents: i64) -> Result<(), CoreError> {
    if amount_cents < 0 {
        return Err(CoreError::Validation(
            "amount_cents must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if !allowed.contains(&value) {
        return Err(CoreError::Validation(format!(
            "{field} must be one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn required_rejects_empty_and_whitespace() {
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "Tax").is_ok());
    }

    #[test]
    fn required_error_names_the_field() {
        let err = validate_required("title", "").unwrap_err();
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn email_format() {
        assert!(validate_email("counsel@firm.example").is_ok());
        assert!(validate_email("bad-email").is_err());
        assert!(validate_email("missing@tld@twice").is_err());
    }

    #[test]
    fn time_range_must_be_forward() {
        let now = Utc::now();
        assert!(validate_time_range(now, now + Duration::hours(1)).is_ok());
        assert!(validate_time_range(now, now).is_err());
        assert!(validate_time_range(now, now - Duration::minutes(5)).is_err());
    }

    #[test]
    fn status_sets() {
        assert!(validate_case_status("open").is_ok());
        assert!(validate_case_status("archived").is_err());
        assert!(validate_invoice_status("paid").is_ok());
        assert!(validate_invoice_status("overdue").is_err());
    }

    #[test]
    fn negative_amounts_rejected() {
        assert!(validate_amount_cents(0).is_ok());
        assert!(validate_amount_cents(125_00).is_ok());
        assert!(validate_amount_cents(-1).is_err());
    }
}
