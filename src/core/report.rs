//! Text rendering of punch records and pay results, shared by the CLI and the shell.

use crate::core::calculator::hours::format_hours;
use crate::models::pay::PayResult;
use crate::models::punch::PunchRecord;
use crate::models::tracker_state::TrackerState;
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::money;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_elapsed;
use chrono::{DateTime, Local};

pub fn records_table(records: &[PunchRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("Date", 10),
        Column::new("In Time", 8),
        Column::new("Out Time", 8),
        Column::new("Total Time", 12),
    ]);

    for (i, rec) in records.iter().enumerate() {
        let total = rec
            .hours()
            .map(format_hours)
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            (i + 1).to_string(),
            rec.date_str(),
            colorize_in_out(&rec.in_str(), true),
            colorize_in_out(&rec.out_str(), false),
            colorize_optional(&total),
        ]);
    }

    table.render()
}

/// One-line status: punched in since when, or punched out.
pub fn status_line(state: &TrackerState, now: DateTime<Local>) -> String {
    match state.open_punch {
        Some(since) => format!(
            "Punched in since {} ({} elapsed)",
            since.format("%Y-%m-%d %H:%M"),
            format_elapsed(now - since)
        ),
        None => format!("Punched out ({} record(s))", state.records.len()),
    }
}

pub fn pay_lines(result: &PayResult) -> [String; 2] {
    [
        format!("Gross Pay: {}", money(result.gross)),
        format!("Net Pay: {}", money(result.net)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::table::strip_ansi;
    use chrono::{Duration, TimeZone};

    #[test]
    fn table_shows_dash_for_open_record() {
        let start = Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        let mut done = PunchRecord::open(start);
        done.complete(start + Duration::minutes(450));
        let open = PunchRecord::open(start + Duration::hours(9));

        let out = strip_ansi(&records_table(&[done, open]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("2025-06-02"));
        assert!(lines[1].contains("09:00"));
        assert!(lines[1].contains("16:30"));
        assert!(lines[1].contains("7.50 hours"));
        assert!(lines[2].contains("18:00"));
        assert!(lines[2].trim_end().ends_with('-'));
    }

    #[test]
    fn pay_lines_use_two_decimals() {
        let [gross, net] = pay_lines(&PayResult {
            gross: 800.0,
            net: 720.0,
        });
        assert_eq!(gross, "Gross Pay: 800.00");
        assert_eq!(net, "Net Pay: 720.00");
    }

    #[test]
    fn status_reports_elapsed_time() {
        let since = Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        let state = TrackerState::from_records(vec![PunchRecord::open(since)]).unwrap();
        let line = status_line(&state, since + Duration::seconds(90));
        assert!(line.ends_with("(00:01:30 elapsed)"));
    }
}
