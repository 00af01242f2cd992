//! Elapsed-hours aggregation over a loaded record list.
//!
//! Pure functions: callers load the records once and pass a reference
//! time, so totals for open shifts stay consistent within one command.

use crate::core::clock::find_open;
use crate::models::record::ShiftRecord;
use crate::models::status::ShiftStatus;
use chrono::{DateTime, Local};

/// Sum of elapsed hours over every record whose employee name
/// case-insensitively contains `filter`. Open shifts are valued
/// against `as_of`.
pub fn filtered_total(records: &[ShiftRecord], filter: &str, as_of: DateTime<Local>) -> f64 {
    records
        .iter()
        .filter(|r| r.matches(filter))
        .map(|r| r.elapsed_hours(as_of))
        .sum()
}

/// Clock state for one employee name: clocked in iff an open record exists.
pub fn status_for(records: &[ShiftRecord], name: &str) -> ShiftStatus {
    if find_open(records, name).is_some() {
        ShiftStatus::ClockedIn
    } else {
        ShiftStatus::ClockedOut
    }
}

/// Count of open shifts in the whole list (across all employees).
pub fn open_count(records: &[ShiftRecord]) -> usize {
    records.iter().filter(|r| r.is_open()).count()
}
