use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::ShiftStore;

/// Export shift records to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        employee,
        force,
    } = cmd
    {
        let store = ShiftStore::open(&cfg.store);

        ExportLogic::export(
            &store,
            format.clone(),
            file,
            employee,
            *force,
            cfg.hours_precision,
        )?;
    }
    Ok(())
}
