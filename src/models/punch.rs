use crate::core::calculator::hours::duration_to_hours;
use chrono::{DateTime, Duration, Local};

/// One work session: opened by a punch-in, completed by the matching punch-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchRecord {
    pub in_time: DateTime<Local>,
    pub out_time: Option<DateTime<Local>>,
    pub duration: Option<Duration>,
}

impl PunchRecord {
    /// Open record, as created by a punch-in.
    pub fn open(in_time: DateTime<Local>) -> Self {
        Self {
            in_time,
            out_time: None,
            duration: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Fill out_time and duration. Only an open record may be completed.
    pub(crate) fn complete(&mut self, out_time: DateTime<Local>) -> Duration {
        debug_assert!(self.is_open(), "punch record completed twice");
        let duration = out_time - self.in_time;
        self.out_time = Some(out_time);
        self.duration = Some(duration);
        duration
    }

    /// Duration in fractional hours (None while still open).
    pub fn hours(&self) -> Option<f64> {
        self.duration.map(duration_to_hours)
    }

    pub fn date_str(&self) -> String {
        self.in_time.format("%Y-%m-%d").to_string()
    }

    pub fn in_str(&self) -> String {
        self.in_time.format("%H:%M").to_string()
    }

    pub fn out_str(&self) -> String {
        self.out_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
