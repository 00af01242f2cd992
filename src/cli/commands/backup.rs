use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Copy the record store to a backup file, optionally gzipped.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let dest = expand_tilde(file);

        if dest.exists()
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                dest.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        let written = BackupLogic::backup(Path::new(&cfg.store), &dest, *compress)?;
        success(format!("Backup created: {}", written.display()));
    }
    Ok(())
}
