use crate::db::pool::DbPool;
use crate::db::queries::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// Colour of an operation name in the audit log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "in" => Colour::Green,
        "out" => Colour::Red,
        "pay" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one line per entry.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        let op_w = entries
            .iter()
            .map(|e| Self::op_target(e).len())
            .max()
            .unwrap_or(0)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let mut op_target = Self::op_target(e);
                if op_target.chars().count() > MAX_OP_WIDTH {
                    op_target = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                    op_target.push_str("...");
                }

                // Only the operation word is coloured.
                let colored = match op_target.split_once(' ') {
                    Some((op, rest)) => {
                        format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                    }
                    None => color_for_operation(&e.operation)
                        .paint(op_target.as_str())
                        .to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    e.id,
                    date,
                    colored,
                    padding,
                    e.message,
                    id_w = id_w
                )
            })
            .collect()
    }

    fn op_target(e: &LogEntry) -> String {
        if e.target.is_empty() {
            e.operation.clone()
        } else {
            format!("{} ({})", e.operation, e.target)
        }
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, op: &str, target: &str, msg: &str) -> LogEntry {
        LogEntry {
            id,
            date: "2025-06-01T09:00:00+02:00".into(),
            operation: op.into(),
            target: target.into(),
            message: msg.into(),
        }
    }

    #[test]
    fn lines_keep_order_and_content() {
        let lines = LogLogic::render(&[
            entry(1, "in", "punch", "Punched in"),
            entry(12, "out", "", "Punched out after 01:00:00"),
        ]);

        assert_eq!(lines.len(), 2);
        let first = strip_ansi(&lines[0]);
        assert!(first.starts_with(" 1: 2025-06-01T09:00:00+02:00 | in (punch)"));
        assert!(first.ends_with("=> Punched in"));
        assert!(strip_ansi(&lines[1]).contains("12: "));
    }
}
