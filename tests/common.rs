#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local};
use shiftclock::models::record::ShiftRecord;
use shiftclock::store::ShiftStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sc() -> Command {
    cargo_bin_cmd!("shiftclock")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftclock.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed a closed shift directly via the library store API, `hours` long and
/// ending now. Useful for totals and export tests that need known durations.
pub fn seed_closed_shift(store_path: &str, employee: &str, hours: i64) {
    let now = Local::now();
    let mut record = ShiftRecord::open(employee, None);
    record.clock_in = now - Duration::hours(hours);
    record.close(now);

    let store = ShiftStore::open(store_path);
    let mut records = store.load();
    records.insert(0, record);
    store.save(&records).expect("save seeded store");
}

/// Number of records currently in the store file.
pub fn record_count(store_path: &str) -> usize {
    ShiftStore::open(store_path).load().len()
}
