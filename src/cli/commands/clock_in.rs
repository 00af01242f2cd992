use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::store::ShiftStore;
use crate::ui::messages::success;

/// Open a new shift for an employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { name, note } = cmd {
        let store = ShiftStore::open(&cfg.store);

        let record = ClockLogic::clock_in(&store, name, note.as_deref())?;

        success(format!(
            "{} clocked in at {}",
            record.employee,
            record.clock_in.format("%H:%M")
        ));
    }
    Ok(())
}
