use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::find_open;
use crate::core::hours::{filtered_total, open_count, status_for};
use crate::errors::AppResult;
use crate::models::record::ShiftRecord;
use crate::store::ShiftStore;
use crate::utils::time::{format_duration_hm, format_hours};
use chrono::Local;
use std::thread;
use std::time::Duration;

/// Show the clock state for one employee (or the whole store) plus the
/// filtered total hours. With `--watch` the line refreshes every second
/// until interrupted; the store is only read, never written.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { name, watch } = cmd {
        let store = ShiftStore::open(&cfg.store);
        let records = store.load();
        let filter = name.as_deref().map(str::trim).unwrap_or("");

        if !*watch {
            print_status(&records, filter, cfg.hours_precision);
            return Ok(());
        }

        // Display-only refresh loop, one tick per second. Runs until the
        // process is interrupted (Ctrl-C); each tick recomputes elapsed
        // hours against the current time from the records read above.
        loop {
            print!("\x1b[2J\x1b[H");
            print_status(&records, filter, cfg.hours_precision);
            thread::sleep(Duration::from_secs(1));
        }
    }
    Ok(())
}

fn print_status(records: &[ShiftRecord], filter: &str, precision: usize) {
    let now = Local::now();

    if filter.is_empty() {
        println!(
            "{} record(s), {} open shift(s)",
            records.len(),
            open_count(records)
        );
    } else {
        let state = status_for(records, filter);
        match find_open(records, filter) {
            Some(open) => println!(
                "{} is {} since {} ({} elapsed)",
                filter,
                state.as_str(),
                open.clock_in.format("%H:%M"),
                format_duration_hm(open.elapsed_hours(now))
            ),
            None => println!("{} is {}", filter, state.as_str()),
        }
    }

    println!(
        "Total hours{}: {}",
        if filter.is_empty() {
            String::new()
        } else {
            format!(" for '{}'", filter)
        },
        format_hours(filtered_total(records, filter, now), precision)
    );
}
