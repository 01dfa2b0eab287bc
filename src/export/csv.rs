use super::model::{headers, row_to_fields, ReportRow};
use crate::errors::{AppError, AppResult};
use csv::Writer;
use std::path::Path;

/// Write report rows as UTF-8, comma-separated CSV with a header row.
/// The ranged layout (leading Date column) is used when any row carries a
/// date.
pub fn write_report_csv(path: &Path, rows: &[ReportRow]) -> AppResult<()> {
    let with_date = rows.iter().any(|r| r.date.is_some());

    let mut wtr =
        Writer::from_path(path).map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;

    wtr.write_record(headers(with_date))
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record(row_to_fields(row, with_date))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
