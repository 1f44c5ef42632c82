//! Conversions between tracked durations and the decimal hours used by the calculator.

use chrono::Duration;

pub fn duration_to_hours(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / 3_600_000.0
}

/// Format decimal hours the way records are shown ("7.50 hours").
pub fn format_hours(hours: f64) -> String {
    format!("{:.2} hours", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ninety_minutes_is_one_and_a_half_hours() {
        assert_eq!(duration_to_hours(Duration::minutes(90)), 1.5);
        assert_eq!(format_hours(1.5), "1.50 hours");
    }
}
