use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::hours::{duration_to_hours, format_hours};
use crate::core::clock::SystemClock;
use crate::core::report::records_table;
use crate::core::tracker::TimeTracker;
use crate::db::initialize::open_db;
use crate::db::queries::load_state;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::formatting::{bold, separator};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let pool = open_db(&cfg.database)?;
        let tracker = TimeTracker::from_state(load_state(&pool)?, SystemClock)?;
        let records = tracker.records();

        if *json {
            let rows = ExportLogic::rows(records);
            let out = serde_json::to_string_pretty(&rows)
                .map_err(|e| AppError::Export(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if records.is_empty() {
            println!("No punch records yet.");
            return Ok(());
        }

        println!("{}", bold(&format!("🕒 Punch records ({}):", records.len())));
        print!("{}", records_table(records));
        println!("{}", separator(&cfg.separator_char, 46));
        println!(
            "Total: {}",
            format_hours(duration_to_hours(tracker.worked_duration()))
        );
    }
    Ok(())
}
