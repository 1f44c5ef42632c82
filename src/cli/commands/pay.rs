use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::hours::{duration_to_hours, format_hours};
use crate::core::calculator::pay::calculate_with;
use crate::core::clock::SystemClock;
use crate::core::report::pay_lines;
use crate::core::tracker::TimeTracker;
use crate::db::initialize::open_db;
use crate::db::queries::load_state;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Pick the command-line value, else the configured default.
fn with_default(arg: &Option<String>, default: Option<f64>, field: &'static str) -> AppResult<String> {
    match (arg, default) {
        (Some(v), _) => Ok(v.clone()),
        (None, Some(d)) => Ok(d.to_string()),
        (None, None) => Err(AppError::MissingInput(field)),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pay {
        hours,
        rate,
        deduction,
        tracked,
    } = cmd
    {
        let hours = if *tracked {
            let pool = open_db(&cfg.database)?;
            let tracker = TimeTracker::from_state(load_state(&pool)?, SystemClock)?;
            let h = duration_to_hours(tracker.worked_duration());
            info(format!(
                "Hours from {} completed record(s): {}",
                tracker.state().completed().count(),
                format_hours(h)
            ));
            h.to_string()
        } else {
            hours.clone().ok_or(AppError::MissingInput("hours"))?
        };

        let rate = with_default(rate, cfg.default_rate, "rate")?;
        let deduction = with_default(deduction, cfg.default_deduction, "deduction")?;

        let result = calculate_with(&hours, &rate, &deduction, cfg.pay_validation)?;
        for line in pay_lines(&result) {
            println!("{}", line);
        }
    }
    Ok(())
}
