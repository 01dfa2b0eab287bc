use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall.
/// CLI application to track daily staff attendance over a JSON document store.
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily staff attendance: check-in/out, day-end rollover, reports and performance",
    long_about = None
)]
pub struct Cli {
    /// Override the document store directory (useful for tests or a custom location)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Acting user name for role-gated operations
    #[arg(global = true, long = "user", default_value = "cli")]
    pub user: String,

    /// Acting role: admin or user
    #[arg(global = true, long = "role", default_value = "admin")]
    pub role: String,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, data directory and default settings
    Init,

    /// View or edit the working-hours settings document
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long = "name", help = "Organization name")]
        name: Option<String>,

        #[arg(long = "start", help = "Working hours start (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Working hours end (HH:MM)")]
        end: Option<String>,

        #[arg(long = "grace", help = "Grace period in minutes")]
        grace: Option<u32>,
    },

    /// Manage the live roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Record a check-in for a person
    Checkin {
        /// Roster record id
        id: String,

        /// Check-in time (HH:MM); defaults to now in the organization's offset
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// Record a check-out for a person
    Checkout {
        /// Roster record id
        id: String,

        /// Check-out time (HH:MM); defaults to now in the organization's offset
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// Show today's roster with derived statuses and stat counts
    Dashboard,

    /// Archive today into history and reset the live roster (admin only)
    EndDay {
        /// Finish a rollover that was interrupted between archive and reset
        #[arg(long = "resume")]
        resume: bool,

        /// Archive under this date instead of today (YYYY-MM-DD)
        #[arg(long = "date", hide = true)]
        date: Option<String>,
    },

    /// Generate a daily or ranged attendance report from history
    Report {
        /// Single day (YYYY-MM-DD)
        #[arg(long = "date", conflicts_with = "range")]
        date: Option<String>,

        /// Inclusive range START:END (YYYY-MM-DD:YYYY-MM-DD)
        #[arg(long = "range")]
        range: Option<String>,

        /// Also write the report as CSV to this file
        #[arg(long = "out")]
        out: Option<String>,
    },

    /// Score attendance over the last 30 days of working days
    Performance {
        /// Score a single person by name instead of the whole roster
        #[arg(long = "name")]
        name: Option<String>,

        /// Evaluate the window as of this date (YYYY-MM-DD)
        #[arg(long = "as-of", hide = true)]
        as_of: Option<String>,
    },

    /// Refresh the dashboard on an interval until interrupted
    Watch {
        /// Refresh interval in seconds (default from config)
        #[arg(long = "interval")]
        interval: Option<u64>,

        /// Stop after this many refreshes instead of running forever
        #[arg(long = "ticks")]
        ticks: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum RosterAction {
    /// Add a person to the roster
    Add {
        name: String,

        #[arg(long = "trade", default_value = "")]
        trade: String,
    },

    /// List the roster
    List,

    /// Remove a person by record id
    Del { id: String },
}
