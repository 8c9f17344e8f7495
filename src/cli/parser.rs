use crate::models::period::Period;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchclock
#[derive(Parser)]
#[command(
    name = "rpunchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: punch in/out, breaks, chronometer and automatic registration",
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

    /// Register the next punch (entry, break start, break end, exit)
    Punch,

    /// Show the next action, the last punch and the running chronometer
    Status,

    /// List recorded punches, most recent first
    List {
        #[arg(
            long,
            short,
            value_enum,
            default_value = "today",
            help = "Period to show: today, week, month or all"
        )]
        period: Period,
    },

    /// Show or change the configured punch times
    Schedule {
        #[arg(long = "print", help = "Print the current schedule")]
        print: bool,

        #[arg(long = "entry", help = "Entry time (HH:MM)")]
        entry: Option<String>,

        #[arg(long = "break-start", help = "Break start time (HH:MM)")]
        break_start: Option<String>,

        #[arg(long = "break-end", help = "Break end time (HH:MM)")]
        break_end: Option<String>,

        #[arg(long = "exit", help = "Exit time (HH:MM)")]
        exit: Option<String>,
    },

    /// Keep running: live clock, chronometer and automatic registration
    Watch {
        #[arg(
            long = "once",
            help = "Run startup and the jobs currently due, then exit"
        )]
        once: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
