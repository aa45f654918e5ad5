use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ticktrack
/// CLI application to run per-project stopwatches with SQLite
#[derive(Parser)]
#[command(
    name = "ticktrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A per-project stopwatch CLI: start, pause and stop working blocks backed by SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new project
    Add {
        /// Project name
        name: String,
    },

    /// Rename a project
    Rename {
        /// Project name or numeric id
        project: String,

        /// New project name
        name: String,
    },

    /// List projects with their total and current working time
    List,

    /// Start (or resume) a project's timer
    Start {
        /// Project name or numeric id
        project: String,
    },

    /// Pause a running project's timer
    Pause {
        /// Project name or numeric id
        project: String,
    },

    /// Stop a project's timer and close its working block
    Stop {
        /// Project name or numeric id
        project: String,
    },

    /// Show the reconciled timer state of one or all projects
    Status {
        /// Project name or numeric id (all projects when omitted)
        project: Option<String>,
    },

    /// Live ticking stopwatch display for a project
    Watch {
        /// Project name or numeric id
        project: String,

        #[arg(
            long = "seconds",
            help = "Exit after this many seconds (default: run until Ctrl-C)"
        )]
        seconds: Option<u64>,
    },

    /// Aggregated working time per day and project
    Stats {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "chart", help = "Render per-project totals as a bar chart")]
        chart: bool,
    },

    /// Export closed working blocks
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

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
