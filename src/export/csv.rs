use super::model::{PunchExport, get_headers, to_row};
use crate::errors::{AppError, AppResult};
use csv::Writer;
use std::path::Path;

/// Write the punch rows as CSV. Open records leave out_time/duration/hours empty.
pub fn write_csv(path: &Path, rows: &[PunchExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;
    for row in rows {
        wtr.write_record(to_row(row))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
