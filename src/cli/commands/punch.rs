use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::report::status_line;
use crate::core::tracker::{PunchOutcome, TimeTracker};
use crate::db::initialize::open_db;
use crate::db::log::ttlog;
use crate::db::queries::{load_state, persist_outcome};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle `in`, `out` and `status`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = open_db(&cfg.database)?;
    let mut tracker = TimeTracker::from_state(load_state(&pool)?, SystemClock)?;

    let outcome = match cmd {
        Commands::In => Some(tracker.punch_in()),
        Commands::Out => Some(tracker.punch_out()),
        _ => None,
    };

    if let Some(outcome) = outcome {
        persist_outcome(&mut pool, &outcome, tracker.state())?;

        let (op, message) = match &outcome {
            PunchOutcome::PunchedIn(at) => {
                let msg = format!("Punched in at {}", at.format("%Y-%m-%d %H:%M"));
                success(&msg);
                ("in", Some(msg))
            }
            PunchOutcome::PunchedOut(idx, rec) => {
                let msg = format!(
                    "Punched out at {} (record #{}, {:.2} hours)",
                    rec.out_str(),
                    idx + 1,
                    rec.hours().unwrap_or_default()
                );
                success(&msg);
                ("out", Some(msg))
            }
            PunchOutcome::AlreadyIn(since) => {
                warning(format!(
                    "Already punched in since {}; nothing to do.",
                    since.format("%Y-%m-%d %H:%M")
                ));
                ("in", None)
            }
            PunchOutcome::NotIn => {
                warning("Not punched in; nothing to do.");
                ("out", None)
            }
        };

        if let Some(msg) = message
            && let Err(e) = ttlog(&pool.conn, op, "punch", &msg)
        {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    println!("{}", status_line(tracker.state(), tracker.clock().now()));
    Ok(())
}
