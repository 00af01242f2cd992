use crate::models::record::ShiftRecord;
use crate::utils::time::format_hours;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Flat one-row-per-shift structure for export.
#[derive(Serialize, Clone, Debug)]
pub struct ShiftExport {
    pub id: String,
    pub employee: String,
    pub clock_in: String,
    pub clock_out: String,
    pub hours: String,
    pub note: String,
}

impl ShiftExport {
    /// Open shifts get an empty clock_out column and hours valued at `as_of`.
    pub fn from_record(r: &ShiftRecord, as_of: DateTime<Local>, precision: usize) -> Self {
        Self {
            id: r.id.clone(),
            employee: r.employee.clone(),
            clock_in: r.clock_in.to_rfc3339(),
            clock_out: r.clock_out.map(|t| t.to_rfc3339()).unwrap_or_default(),
            hours: format_hours(r.elapsed_hours(as_of), precision),
            note: r.note.clone().unwrap_or_default(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "employee", "clock_in", "clock_out", "hours", "note"]
}
