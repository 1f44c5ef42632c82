use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimecard
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time card: punch in/out, list sessions and compute gross/net pay",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Punch in (start a work session)
    In,

    /// Punch out (close the open work session)
    Out,

    /// Show whether you are currently punched in
    Status,

    /// List punch records
    List {
        #[arg(long = "json", help = "Print records as JSON")]
        json: bool,
    },

    /// Compute gross and net pay
    Pay {
        /// Worked hours (decimal)
        #[arg(long = "hours", conflicts_with = "tracked", allow_hyphen_values = true)]
        hours: Option<String>,

        /// Hourly rate (falls back to `default_rate` in the config)
        #[arg(long = "rate", allow_hyphen_values = true)]
        rate: Option<String>,

        /// Deduction percentage (falls back to `default_deduction` in the config)
        #[arg(long = "deduction", allow_hyphen_values = true)]
        deduction: Option<String>,

        /// Use the total of completed punch records as hours
        #[arg(long = "tracked")]
        tracked: bool,
    },

    /// Export punch records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Interactive session (login, punch, pay). Nothing is saved.
    Shell,
}
