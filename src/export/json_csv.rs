use crate::errors::{AppError, AppResult};
use crate::export::model::{ShiftExport, get_headers};
use csv::Writer;
use std::fs;
use std::path::Path;

/// Write the shift rows as CSV.
pub(crate) fn export_csv(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record([
            row.id.as_str(),
            row.employee.as_str(),
            row.clock_in.as_str(),
            row.clock_out.as_str(),
            row.hours.as_str(),
            row.note.as_str(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the shift rows as pretty-printed JSON.
pub(crate) fn export_json(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
