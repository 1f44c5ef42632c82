use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Initialize the database.
/// Schema creation and upgrades are handled by the migration step.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Open the database at `path` (creating its directory if needed) with an up-to-date schema.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
