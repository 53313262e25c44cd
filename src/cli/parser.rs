use crate::export::ExportFormat;
use crate::models::career::CareerType;
use crate::models::event_type::EventType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for datecountdown
/// CLI application to follow birthdays, anniversaries, memorials and retirement countdowns
#[derive(Parser)]
#[command(
    name = "datecountdown",
    version = env!("CARGO_PKG_VERSION"),
    about = "Countdowns to birthdays, anniversaries, memorials and retirement, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add an event
    Add {
        /// Event type
        #[arg(value_enum)]
        kind: EventType,

        #[arg(long, help = "Name (family name, or title of the event)")]
        name: String,

        #[arg(long = "first-name", default_value = "")]
        first_name: String,

        /// Event date, or birth date for a memorial (DD/MM/YYYY)
        #[arg(long)]
        date: Option<String>,

        #[arg(long = "death-date", help = "Date of death, memorial only (DD/MM/YYYY)")]
        death_date: Option<String>,

        #[arg(long = "start-date", help = "Career start, retirement only (DD/MM/YYYY)")]
        start_date: Option<String>,

        #[arg(long = "birth-date", help = "Birth date, retirement only (DD/MM/YYYY)")]
        birth_date: Option<String>,

        #[arg(long, help = "Arduous career (retirement and work medals)")]
        penible: bool,

        #[arg(long, value_enum, help = "Career type (default from configuration)")]
        career: Option<CareerType>,
    },

    /// Change fields of an existing event
    Edit {
        id: i64,

        #[arg(long = "type", value_enum)]
        kind: Option<EventType>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "first-name")]
        first_name: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long = "death-date", help = "Use an empty string to clear it")]
        death_date: Option<String>,

        #[arg(long = "start-date")]
        start_date: Option<String>,

        #[arg(long = "birth-date", help = "Use an empty string to clear it")]
        birth_date: Option<String>,

        #[arg(long, conflicts_with = "not_penible")]
        penible: bool,

        #[arg(long = "not-penible")]
        not_penible: bool,

        #[arg(long, value_enum)]
        career: Option<CareerType>,
    },

    /// Delete an event by id
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List events with their countdown
    List {
        #[arg(long = "type", value_enum, help = "Only show events of this type")]
        kind: Option<EventType>,
    },

    /// Show one event with all its attributes
    Show { id: i64 },

    /// Upcoming occurrences in a date range
    Agenda {
        #[arg(long, help = "Range start, included (YYYY-MM-DD or DD/MM/YYYY)")]
        from: Option<String>,

        #[arg(long, help = "Range end, excluded (YYYY-MM-DD or DD/MM/YYYY)")]
        to: Option<String>,
    },

    /// Saint of the day
    Saint {
        #[arg(long, help = "Another day (YYYY-MM-DD or DD/MM/YYYY)")]
        date: Option<String>,
    },

    /// Public holiday of the day, or all holidays of a year
    Holiday {
        #[arg(long, conflicts_with = "year")]
        date: Option<String>,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Export events with their countdown
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import events from an options JSON file ({"events": [...]})
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
