//! Time helpers
//!
//! Date-string to timestamp conversion happens at the API handler layer;
//! repositories only ever see `i64` Unix millis.

use chrono::NaiveDate;

use shared::{AppError, error::AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's date (UTC)
pub fn today_utc() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Validate that a date is not before today
pub fn validate_not_past(date: NaiveDate) -> AppResult<()> {
    let today = today_utc();
    if date < today {
        return Err(AppError::validation(format!(
            "Date {} is in the past (today is {})",
            date, today
        )));
    }
    Ok(())
}

/// Start of day (00:00:00.000) as Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .timestamp_millis()
}

/// End of day (23:59:59.999) as Unix millis
pub fn day_end_millis(date: NaiveDate) -> i64 {
    day_start_millis(date) + 24 * 60 * 60 * 1000 - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2026-03-15").is_ok());
        assert!(parse_date("15/03/2026").is_err());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_day_window() {
        let date = parse_date("2026-03-15").expect("valid date");
        let start = day_start_millis(date);
        let end = day_end_millis(date);

        assert_eq!(end - start, 24 * 60 * 60 * 1000 - 1);
        // 2026-03-15T00:00:00Z
        assert_eq!(start, 1773532800000);
    }

    #[test]
    fn test_validate_not_past() {
        let yesterday = today_utc().pred_opt().expect("valid date");
        assert!(validate_not_past(yesterday).is_err());
        assert!(validate_not_past(today_utc()).is_ok());
    }
}
