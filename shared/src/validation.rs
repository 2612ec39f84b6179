use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{
    DATE_IN_PAST_ERROR, GENERIC_FORM_ERROR, INVALID_DATE_ERROR, INVALID_PHONE_ERROR,
    MIN_PHONE_DIGITS, MISSING_ADDRESS_ERROR, RESERVATION_TIME_SLOTS, UNKNOWN_TIME_SLOT_ERROR,
};

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+()\-\s]+$").expect("phone pattern is valid"));
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::new("missing_address"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !PHONE_CHARS.is_match(phone.trim()) || digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::new("invalid_phone"));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` reservation date that is not before `today`.
pub fn validate_reservation_date(date: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if !ISO_DATE.is_match(date) {
        return Err(ValidationError::new("invalid_date"));
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::new("invalid_date"))?;
    if parsed < today {
        return Err(ValidationError::new("date_in_past"));
    }
    Ok(parsed)
}

pub fn validate_time_slot(time: &str) -> Result<(), ValidationError> {
    if !RESERVATION_TIME_SLOTS.iter().any(|slot| *slot == time) {
        return Err(ValidationError::new("unknown_time_slot"));
    }
    Ok(())
}

/// User-facing text for the error codes produced in this module.
pub fn error_message(error: &ValidationError) -> &'static str {
    match error.code.as_ref() {
        "missing_address" => MISSING_ADDRESS_ERROR,
        "invalid_phone" => INVALID_PHONE_ERROR,
        "invalid_date" => INVALID_DATE_ERROR,
        "date_in_past" => DATE_IN_PAST_ERROR,
        "unknown_time_slot" => UNKNOWN_TIME_SLOT_ERROR,
        _ => GENERIC_FORM_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_phone_numbers() {
        assert!(validate_phone("(123) 456-7890").is_ok());
        assert!(validate_phone("+507 6123-4567").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("call me maybe").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_address_required() {
        assert!(validate_address("Calle 5").is_ok());
        assert_eq!(validate_address(" \t").unwrap_err().code, "missing_address");
    }

    #[test]
    fn test_reservation_dates() {
        let today = day(2024, 6, 15);
        assert_eq!(validate_reservation_date("2024-06-15", today).unwrap(), today);
        assert_eq!(validate_reservation_date("2024-07-01", today).unwrap(), day(2024, 7, 1));
        assert_eq!(validate_reservation_date("2024-06-14", today).unwrap_err().code, "date_in_past");
        assert_eq!(validate_reservation_date("2024-02-30", today).unwrap_err().code, "invalid_date");
        assert_eq!(validate_reservation_date("15/06/2024", today).unwrap_err().code, "invalid_date");
    }

    #[test]
    fn test_time_slots() {
        assert!(validate_time_slot("12:00").is_ok());
        assert!(validate_time_slot("21:30").is_ok());
        assert!(validate_time_slot("16:00").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = validate_phone("1").unwrap_err();
        assert_eq!(error_message(&err), INVALID_PHONE_ERROR);
        let err = validate_time_slot("03:00").unwrap_err();
        assert_eq!(error_message(&err), UNKNOWN_TIME_SLOT_ERROR);
        let err = ValidationError::new("checkout_not_open");
        assert_eq!(error_message(&err), GENERIC_FORM_ERROR);
    }
}
