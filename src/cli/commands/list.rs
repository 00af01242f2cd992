use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ShiftStore;
use crate::utils::table::Table;
use crate::utils::time::format_hours;
use chrono::Local;

/// Render the records table, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { employee, open } = cmd {
        let store = ShiftStore::open(&cfg.store);
        let records = store.load();
        let filter = employee.as_deref().unwrap_or("");
        let now = Local::now();

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec!["EMPLOYEE", "CLOCK IN", "CLOCK OUT", "HOURS", "NOTE"],
            sep,
        );

        for r in records
            .iter()
            .filter(|r| r.matches(filter))
            .filter(|r| !*open || r.is_open())
        {
            table.add_row(vec![
                r.employee.clone(),
                r.clock_in_str(),
                r.clock_out_str(),
                format_hours(r.elapsed_hours(now), cfg.hours_precision),
                r.note.clone().unwrap_or_default(),
            ]);
        }

        if table.is_empty() {
            println!("No shift records found.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
