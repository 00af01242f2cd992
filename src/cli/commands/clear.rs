use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::store::ShiftStore;
use crate::ui::messages::{info, success};

/// Delete every shift record after an interactive confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes
            && !ask_confirmation("Delete ALL shift records? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = ShiftStore::open(&cfg.store);
        ClockLogic::clear(&store)?;

        success("All shift records have been deleted.");
    }
    Ok(())
}
