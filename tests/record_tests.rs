//! Library-level tests for shift records, elapsed hours and the JSON store.

use chrono::{Duration, Local};
use shiftclock::core::clock::{ClockLogic, find_open};
use shiftclock::core::hours::{filtered_total, status_for};
use shiftclock::models::record::ShiftRecord;
use shiftclock::store::ShiftStore;

mod common;
use common::setup_test_store;

fn closed_record(employee: &str, hours: i64) -> ShiftRecord {
    let now = Local::now();
    let mut r = ShiftRecord::open(employee, None);
    r.clock_in = now - Duration::hours(hours);
    r.close(now);
    r
}

#[test]
fn elapsed_hours_of_closed_record_is_deterministic() {
    let r = closed_record("Alice", 2);
    let h1 = r.elapsed_hours(Local::now());
    let h2 = r.elapsed_hours(Local::now() + Duration::hours(5));
    // as_of is ignored once the record is closed
    assert_eq!(h1, h2);
    assert!((h1 - 2.0).abs() < 0.01);
}

#[test]
fn elapsed_hours_never_negative() {
    let now = Local::now();
    let mut r = ShiftRecord::open("Alice", None);
    // tampered data: clock-out before clock-in
    r.clock_in = now;
    r.close(now - Duration::hours(1));
    assert_eq!(r.elapsed_hours(now), 0.0);

    // open record queried with a time before clock-in
    let open = ShiftRecord::open("Bob", None);
    assert_eq!(open.elapsed_hours(now - Duration::hours(1)), 0.0);
}

#[test]
fn elapsed_hours_of_open_record_grows_with_the_clock() {
    let r = ShiftRecord::open("Alice", None);
    let t1 = Local::now() + Duration::minutes(30);
    let t2 = Local::now() + Duration::minutes(90);
    assert!(r.elapsed_hours(t1) < r.elapsed_hours(t2));
}

#[test]
fn filter_matches_case_insensitive_substring() {
    let r = closed_record("Alice Smith", 1);
    assert!(r.matches(""));
    assert!(r.matches("ali"));
    assert!(r.matches("SMITH"));
    assert!(!r.matches("bob"));
}

#[test]
fn filtered_total_sums_only_matching_records() {
    let records = vec![
        closed_record("Alice", 2),
        closed_record("Bob", 3),
        closed_record("alice cooper", 1),
    ];
    let now = Local::now();
    assert!((filtered_total(&records, "alice", now) - 3.0).abs() < 0.01);
    assert!((filtered_total(&records, "", now) - 6.0).abs() < 0.01);
    assert_eq!(filtered_total(&records, "carol", now), 0.0);
}

#[test]
fn store_round_trip_preserves_records() {
    let store_path = setup_test_store("round_trip");
    let store = ShiftStore::open(&store_path);

    let records = vec![
        ShiftRecord::open("Alice", Some("front desk".to_string())),
        closed_record("Bob", 8),
    ];
    store.save(&records).unwrap();

    assert_eq!(store.load(), records);
}

#[test]
fn store_wire_layout_uses_camel_case_and_omits_absent_fields() {
    let store_path = setup_test_store("wire_layout");
    let store = ShiftStore::open(&store_path);

    store.save(&[ShiftRecord::open("Alice", None)]).unwrap();

    let raw = std::fs::read_to_string(&store_path).unwrap();
    assert!(raw.contains("\"clockIn\""));
    assert!(!raw.contains("\"clockOut\""));
    assert!(!raw.contains("\"note\""));
    assert!(!raw.contains("clock_in"));
}

#[test]
fn clock_in_ids_are_unique() {
    let store_path = setup_test_store("unique_ids");
    let store = ShiftStore::open(&store_path);

    let a = ClockLogic::clock_in(&store, "Alice", None).unwrap();
    let b = ClockLogic::clock_in(&store, "Bob", None).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn clock_out_closes_most_recent_open_record() {
    let store_path = setup_test_store("tampered_two_open");
    let store = ShiftStore::open(&store_path);

    // tampered data: two open records for the same name, newest first
    let older = ShiftRecord::open("Alice", None);
    let newer = ShiftRecord::open("Alice", None);
    store.save(&[newer.clone(), older.clone()]).unwrap();

    ClockLogic::clock_out(&store, "Alice").unwrap();

    let records = store.load();
    assert!(!records[0].is_open());
    assert_eq!(records[0].id, newer.id);
    assert!(records[1].is_open());
}

#[test]
fn status_follows_the_open_record() {
    let store_path = setup_test_store("status_cycle");
    let store = ShiftStore::open(&store_path);

    assert!(!status_for(&store.load(), "Alice").is_clocked_in());

    ClockLogic::clock_in(&store, "Alice", None).unwrap();
    let records = store.load();
    assert!(status_for(&records, "Alice").is_clocked_in());
    assert!(find_open(&records, "Alice").is_some());

    ClockLogic::clock_out(&store, "Alice").unwrap();
    assert!(!status_for(&store.load(), "Alice").is_clocked_in());
}

#[test]
fn clear_empties_list_and_persisted_store() {
    let store_path = setup_test_store("clear_empties");
    let store = ShiftStore::open(&store_path);

    ClockLogic::clock_in(&store, "Alice", None).unwrap();
    ClockLogic::clear(&store).unwrap();

    assert!(store.load().is_empty());
    let raw = std::fs::read_to_string(&store_path).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn store_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("shifts.json");
    let store = ShiftStore::open(nested.to_str().unwrap());

    store.save(&[ShiftRecord::open("Alice", None)]).unwrap();

    assert!(nested.exists());
    assert_eq!(store.load().len(), 1);
}

#[test]
fn clock_in_rejects_blank_note_as_absent() {
    let store_path = setup_test_store("blank_note");
    let store = ShiftStore::open(&store_path);

    let r = ClockLogic::clock_in(&store, "Alice", Some("   ")).unwrap();
    assert_eq!(r.note, None);
}
