use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `punches` table.
///
/// `seq` is the 1-based position of the record; insertion order is chronological order.
fn create_punches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            seq          INTEGER PRIMARY KEY,
            in_time      TEXT NOT NULL,
            out_time     TEXT,
            duration_ms  INTEGER,
            CHECK ((out_time IS NULL) = (duration_ms IS NULL))
        );
        "#,
    )
}

/// Bring the schema up to date. Safe to call on every start.
///
/// Writes nothing to stdout: commands such as `list --json` open the
/// database before printing their output.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "punches")? {
        create_punches_table(conn)?;
    }

    Ok(())
}
