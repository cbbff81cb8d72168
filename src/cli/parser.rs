use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time clock: punch in/out, review weekly hours and export reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Employee acting in this session (defaults to `default_employee`)
    #[arg(global = true, long = "employee", short = 'e')]
    pub employee: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Show whether the next action is a clock-in or a clock-out
    Status,

    /// Clock in or out at the current time
    Punch,

    /// Add a custom entry
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM or HH:MM:SS)")]
        time_in: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM or HH:MM:SS)")]
        time_out: Option<String>,
    },

    /// Delete an entry by ID
    Del {
        /// Entry ID (see `list --ids`)
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the weekly hours report
    List {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (start:end)"
        )]
        range: Option<String>,

        #[arg(long = "ids", help = "Prefix entries with their ID")]
        ids: bool,

        #[arg(long = "totals", help = "Print worked time per week")]
        totals: bool,
    },

    /// Export entries or the weekly report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Export every employee (csv/json only)")]
        all: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register a new employee
    Add {
        id: String,

        #[arg(long)]
        name: Option<String>,
    },

    /// Remove an employee and all of their entries
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Look an employee up (login check)
    Show { id: String },

    /// List registered employees
    List,
}
