use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hours::filtered_total;
use crate::errors::AppResult;
use crate::store::ShiftStore;
use crate::utils::time::format_hours;
use chrono::Local;

/// Sum elapsed hours over every record matching the filter.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Total { filter } = cmd {
        let store = ShiftStore::open(&cfg.store);
        let records = store.load();
        let filter = filter.as_deref().map(str::trim).unwrap_or("");

        let total = filtered_total(&records, filter, Local::now());

        if filter.is_empty() {
            println!(
                "Total hours: {}",
                format_hours(total, cfg.hours_precision)
            );
        } else {
            println!(
                "Total hours for '{}': {}",
                filter,
                format_hours(total, cfg.hours_precision)
            );
        }
    }
    Ok(())
}
