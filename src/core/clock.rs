use crate::errors::{AppError, AppResult};
use crate::models::record::ShiftRecord;
use crate::store::ShiftStore;
use chrono::Local;

/// High-level business logic for the `in`, `out` and `clear` commands.
pub struct ClockLogic;

/// Find the open record for `name`, if any. The list is newest-first, so
/// when tampered data holds several open records for one name this returns
/// the most recent one.
pub fn find_open<'a>(records: &'a [ShiftRecord], name: &str) -> Option<&'a ShiftRecord> {
    records.iter().find(|r| r.is_open() && r.employee == name)
}

impl ClockLogic {
    /// Open a new shift for `name`.
    ///
    /// Fails without touching the store when the trimmed name is empty or
    /// an open shift already exists for that exact name. Closed records
    /// never block a new clock-in.
    pub fn clock_in(store: &ShiftStore, name: &str, note: Option<&str>) -> AppResult<ShiftRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyEmployee);
        }

        let mut records = store.load();
        if find_open(&records, name).is_some() {
            return Err(AppError::AlreadyClockedIn(name.to_string()));
        }

        let note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let record = ShiftRecord::open(name, note);
        records.insert(0, record.clone());
        store.save(&records)?;

        Ok(record)
    }

    /// Close the open shift for `name`, stamping the clock-out time.
    pub fn clock_out(store: &ShiftStore, name: &str) -> AppResult<ShiftRecord> {
        let name = name.trim();
        let mut records = store.load();

        let open = records
            .iter_mut()
            .find(|r| r.is_open() && r.employee == name)
            .ok_or_else(|| AppError::NotClockedIn(name.to_string()))?;

        open.close(Local::now());
        let closed = open.clone();
        store.save(&records)?;

        Ok(closed)
    }

    /// Drop every record and persist the empty list. The interactive
    /// confirmation happens in the CLI layer, before this is reached.
    pub fn clear(store: &ShiftStore) -> AppResult<()> {
        store.clear()
    }
}
