use clap::{Parser, Subcommand};

/// Command-line interface definition for bacchus
/// CLI reporting and data-synthesis tool for the Bacchus winery database
#[derive(Parser)]
#[command(
    name = "bacchus",
    version = env!("CARGO_PKG_VERSION"),
    about = "Winery database reports and synthetic time-punch generation",
    long_about = None
)]
pub struct Cli {
    /// Override the database path (skips the env file lookup)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Env file holding the connection settings
    #[arg(global = true, long = "env-file", default_value = "setup.env")]
    pub env_file: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the winery database schema
    Init,

    /// Show the resolved connection configuration
    Config,

    /// List every table in the database and dump its rows
    Tables {
        #[arg(long = "schema", help = "Also print each table's column schema")]
        schema: bool,
    },

    /// Supplier delivery report: expected vs actual dates
    Deliveries,

    /// Wine distribution and sales reports
    Sales,

    /// Employee hours report: quarterly and yearly averages
    Hours {
        #[arg(
            long = "year-start",
            default_value = "2024-12-01",
            help = "First day of the fiscal year the four quarters are computed from (YYYY-MM-DD)"
        )]
        year_start: String,
    },

    /// Generate pseudo-random time punches and bulk-load the Hours table
    Generate {
        /// First day of the window (YYYY-MM-DD)
        #[arg(long = "from", default_value = "2024-12-01")]
        from: String,

        /// Last day of the window, inclusive (YYYY-MM-DD)
        #[arg(long = "to", default_value = "2025-11-30")]
        to: String,

        /// Comma-separated employee IDs (default: every employee on file)
        #[arg(long = "employees")]
        employees: Option<String>,

        /// Also derive start/end shift timestamps for each punch
        #[arg(long = "shifts")]
        shifts: bool,

        /// Seed the random source for a reproducible run
        #[arg(long = "seed")]
        seed: Option<u64>,
    },
}
