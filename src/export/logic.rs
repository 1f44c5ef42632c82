use super::fs_utils::ensure_writable;
use super::model::PunchExport;
use super::{ExportFormat, csv, json, notify_export_success};
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::punch::PunchRecord;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    pub fn rows(records: &[PunchRecord]) -> Vec<PunchExport> {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| PunchExport::from_record(i, r))
            .collect()
    }

    /// Export every stored punch record. Returns the written path and the row count.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<(PathBuf, usize)> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows = Self::rows(&load_records(&pool.conn)?);
        match format {
            ExportFormat::Csv => csv::write_csv(&path, &rows)?,
            ExportFormat::Json => json::write_json(&path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok((path, rows.len()))
    }
}
