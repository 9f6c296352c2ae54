use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rosterboard
/// Assign numbered seats to activities and print the activity lists
#[derive(Parser)]
#[command(
    name = "rosterboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Activity roster board: assign seats to activities, match pasted rosters and render PNG lists",
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

/// `on` / `off` switch for page slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn enabled(&self) -> bool {
        matches!(self, Switch::On)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

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

    /// Toggle an activity on a seat: selecting the current category clears it
    Set {
        /// Seat token, e.g. 1-03
        token: String,

        /// Activity slot (a = Activity 1, b = Activity 2)
        #[arg(long = "slot", short = 's')]
        slot: String,

        /// Category (KF, Media, SportEX, SportIN)
        #[arg(long = "category", short = 'c')]
        category: String,
    },

    /// Clear the activities of one seat, or of every seat with --all
    Clear {
        /// Seat token, e.g. 1-03
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        token: Option<String>,

        #[arg(long = "all", help = "Clear every seat on every page")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List visible seats with their activities
    List {
        #[arg(long = "page", short = 'p', help = "Only this page (1-3)")]
        page: Option<i64>,
    },

    /// Show how many visible seats picked each activity
    Stats,

    /// Show or change page settings (visible seats, enabled slots)
    Pages {
        #[arg(long = "page", short = 'p', help = "Page to update (1-3)")]
        page: Option<i64>,

        #[arg(long = "count", requires = "page", help = "Number of visible seats (1-54)")]
        count: Option<i64>,

        #[arg(long = "slot-a", value_enum, requires = "page", help = "Enable or disable Activity 1")]
        slot_a: Option<Switch>,

        #[arg(long = "slot-b", value_enum, requires = "page", help = "Enable or disable Activity 2")]
        slot_b: Option<Switch>,
    },

    /// Match a pasted roster against the board and render activity-lists.png
    Generate {
        #[arg(long = "input", short = 'i', help = "Roster file ('-' or omitted = stdin)")]
        input: Option<String>,

        #[arg(long = "out", short = 'o', help = "Output directory (default: config output_dir)")]
        out: Option<String>,

        #[arg(long = "json", help = "Also write the matched report as JSON")]
        json: Option<String>,

        #[arg(long = "diagnostics", help = "Show roster text that could not be parsed")]
        diagnostics: bool,

        #[arg(long = "force", help = "Overwrite existing files without asking")]
        force: bool,
    },

    /// Export page grids as page-<n>-export.png
    Export {
        #[arg(long = "page", short = 'p', conflicts_with = "all", help = "Export only this page (1-3)")]
        page: Option<i64>,

        #[arg(long = "all", help = "Export all pages (default)")]
        all: bool,

        #[arg(long = "out", short = 'o', help = "Output directory (default: config output_dir)")]
        out: Option<String>,

        #[arg(long = "force", help = "Overwrite existing files without asking")]
        force: bool,
    },
}
