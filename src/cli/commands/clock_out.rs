use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::store::ShiftStore;
use crate::ui::messages::success;
use crate::utils::time::format_hours;
use chrono::Local;

/// Close the open shift for an employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { name } = cmd {
        let store = ShiftStore::open(&cfg.store);

        let record = ClockLogic::clock_out(&store, name)?;

        let hours = record.elapsed_hours(Local::now());
        success(format!(
            "{} clocked out at {} ({} h worked)",
            record.employee,
            record
                .clock_out
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            format_hours(hours, cfg.hours_precision)
        ));
    }
    Ok(())
}
