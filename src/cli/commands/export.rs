use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        let (path, count) = ExportLogic::export(&pool, *format, file, *force)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} record(s) to {}", count, path.display()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
    Ok(())
}
