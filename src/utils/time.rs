//! Timestamp helpers: storage encoding (RFC 3339) and duration formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, SecondsFormat};

pub fn to_storage(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

pub fn from_storage(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// HH:MM:SS, used for the elapsed time of the open punch.
pub fn format_elapsed(d: Duration) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn storage_encoding_keeps_the_instant() {
        let ts = Local.timestamp_millis_opt(1_717_000_123_456).unwrap();
        assert_eq!(from_storage(&to_storage(&ts)).unwrap(), ts);
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert!(matches!(
            from_storage("yesterday"),
            Err(AppError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::seconds(3725)), "01:02:05");
        assert_eq!(format_elapsed(Duration::seconds(-61)), "-00:01:01");
    }
}
