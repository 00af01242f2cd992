use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftclock
/// CLI application to clock employees in and out of shifts
#[derive(Parser)]
#[command(
    name = "shiftclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time clock CLI: clock in, clock out, and total worked hours per employee",
    long_about = None
)]
pub struct Cli {
    /// Override store file path (useful for tests or custom stores)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the record store and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Clock an employee in (opens a shift)
    In {
        /// Employee display name
        name: String,

        /// Optional free-text note attached to the shift
        #[arg(long, help = "Attach a note to the shift")]
        note: Option<String>,
    },

    /// Clock an employee out (closes the open shift)
    Out {
        /// Employee display name
        name: String,
    },

    /// Show clock state and filtered total hours
    Status {
        /// Employee name (also used as the totals filter)
        name: Option<String>,

        #[arg(long, help = "Refresh once per second for live elapsed time")]
        watch: bool,
    },

    /// List shift records with computed hours
    List {
        #[arg(long, short, help = "Filter by employee name (case-insensitive substring)")]
        employee: Option<String>,

        #[arg(long, help = "Show only open shifts")]
        open: bool,
    },

    /// Sum elapsed hours over matching records
    Total {
        /// Employee name filter (case-insensitive substring, empty = all)
        filter: Option<String>,
    },

    /// Delete ALL shift records
    Clear {
        #[arg(long, short = 'y', help = "Skip the interactive confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the record store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export shift records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Filter by employee name")]
        employee: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
