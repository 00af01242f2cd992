use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftExport;
use crate::export::notify_export_success;
use crate::store::ShiftStore;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use chrono::Local;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export shift records.
    ///
    /// - `file`: absolute path of the output file
    /// - `employee`: optional case-insensitive name filter
    /// - `force`: overwrite an existing output file
    pub fn export(
        store: &ShiftStore,
        format: ExportFormat,
        file: &str,
        employee: &Option<String>,
        force: bool,
        precision: usize,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let filter = employee.as_deref().unwrap_or("");
        let now = Local::now();
        let rows: Vec<ShiftExport> = store
            .load()
            .iter()
            .filter(|r| r.matches(filter))
            .map(|r| ShiftExport::from_record(r, now, precision))
            .collect();

        if rows.is_empty() {
            warning("No shift records found for the selected filter.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
