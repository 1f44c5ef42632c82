use crate::models::punch::PunchRecord;
use crate::utils::time::to_storage;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PunchExport {
    pub seq: usize,
    pub date: String,
    pub in_time: String,
    pub out_time: Option<String>,
    pub duration_secs: Option<i64>,
    pub hours: Option<f64>,
}

impl PunchExport {
    pub fn from_record(idx: usize, rec: &PunchRecord) -> Self {
        Self {
            seq: idx + 1,
            date: rec.date_str(),
            in_time: to_storage(&rec.in_time),
            out_time: rec.out_time.as_ref().map(to_storage),
            duration_secs: rec.duration.map(|d| d.num_seconds()),
            hours: rec.hours().map(|h| (h * 100.0).round() / 100.0),
        }
    }
}

pub(crate) fn get_headers() -> [&'static str; 6] {
    ["seq", "date", "in_time", "out_time", "duration_secs", "hours"]
}

pub(crate) fn to_row(e: &PunchExport) -> Vec<String> {
    vec![
        e.seq.to_string(),
        e.date.clone(),
        e.in_time.clone(),
        e.out_time.clone().unwrap_or_default(),
        e.duration_secs.map(|s| s.to_string()).unwrap_or_default(),
        e.hours.map(|h| format!("{:.2}", h)).unwrap_or_default(),
    ]
}
