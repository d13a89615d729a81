//! Small shared utilities.

use chrono::{Local, NaiveDate, Utc};

/// Today's date in the journal's day format, "YYYY-MM-DD", local time.
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Yesterday relative to a "YYYY-MM-DD" date, when the date parses.
pub fn previous_day(date: &str) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    parsed
        .pred_opt()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Current time as epoch milliseconds, the entry timestamp format.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_string_shape() {
        let today = today_string();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_previous_day() {
        assert_eq!(previous_day("2025-01-10"), Some("2025-01-09".to_string()));
        assert_eq!(previous_day("2025-01-01"), Some("2024-12-31".to_string()));
        assert_eq!(previous_day("2025-03-01"), Some("2025-02-28".to_string()));
    }

    #[test]
    fn test_previous_day_invalid_input() {
        assert_eq!(previous_day("not-a-date"), None);
        assert_eq!(previous_day("2025-13-40"), None);
    }

    #[test]
    fn test_now_ms_is_epoch_millis() {
        // Sanity bound: after 2020, before 2100.
        let now = now_ms();
        assert!(now > 1_577_836_800_000);
        assert!(now < 4_102_444_800_000);
    }
}
