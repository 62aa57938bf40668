//! Shared field-format validators.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{AppError, AppResult};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("valid time regex"));

/// Validates a `YYYY-MM-DD` date string.
///
/// Checks the shape first, then that the value is a real calendar date, so
/// `2024-13-01` is rejected even though it matches the pattern.
pub fn validate_date(field: &str, value: &str) -> AppResult<()> {
    if !DATE_RE.is_match(value) {
        return Err(AppError::InvalidFormat {
            message: format!("Invalid date format for {}. Use YYYY-MM-DD", field),
        });
    }
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err(AppError::InvalidFormat {
            message: format!("Invalid calendar date for {}: {}", field, value),
        });
    }
    Ok(())
}

/// Validates a 24-hour `HH:MM` time-of-day string.
pub fn validate_time(value: &str) -> bool {
    TIME_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_dates() {
        assert!(validate_date("date", "2024-06-01").is_ok());
        assert!(validate_date("date", "2024-02-29").is_ok()); // leap year
    }

    #[test]
    fn test_invalid_date_shapes() {
        assert!(validate_date("date", "06/01/2024").is_err());
        assert!(validate_date("date", "2024-6-1").is_err());
        assert!(validate_date("date", "").is_err());
    }

    #[test]
    fn test_invalid_calendar_dates() {
        assert!(validate_date("date", "2024-13-01").is_err());
        assert!(validate_date("date", "2023-02-29").is_err());
        assert!(validate_date("date", "2024-04-31").is_err());
    }

    #[test]
    fn test_time_bounds() {
        assert!(validate_time("00:00"));
        assert!(validate_time("09:30"));
        assert!(validate_time("23:59"));
        assert!(!validate_time("24:00"));
        assert!(!validate_time("12:60"));
        assert!(!validate_time("9:30"));
        assert!(!validate_time("12:5"));
    }

    proptest! {
        #[test]
        fn prop_all_valid_times_accepted(h in 0u32..24, m in 0u32..60) {
            let value = format!("{:02}:{:02}", h, m);
            prop_assert!(validate_time(&value));
        }

        #[test]
        fn prop_out_of_range_hours_rejected(h in 24u32..100, m in 0u32..60) {
            let value = format!("{:02}:{:02}", h, m);
            prop_assert!(!validate_time(&value));
        }

        #[test]
        fn prop_date_roundtrip_accepted(y in 1970i32..2100, m in 1u32..13, d in 1u32..29) {
            let value = format!("{:04}-{:02}-{:02}", y, m, d);
            prop_assert!(validate_date("date", &value).is_ok());
        }
    }
}
