use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ShiftStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (unless running in test mode)
///  - an empty record store (if missing)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    println!("⚙️  Initializing shiftclock…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Store       : {}", &cfg.store);

    // Seed an empty store, but never wipe an existing one
    let store = ShiftStore::open(&cfg.store);
    if !store.path().exists() {
        store.save(&[])?;
        println!("✅ Store created at {}", &cfg.store);
    } else {
        println!("✅ Store already present, left untouched");
    }

    println!("🎉 shiftclock initialization completed!");
    Ok(())
}
