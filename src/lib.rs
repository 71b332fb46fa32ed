//! Bacchus winery reporting library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (table renderer, shift generator, database layer).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config => cli::commands::config::handle(cfg),
        Commands::Tables { .. } => cli::commands::tables::handle(&cli.command, cfg),
        Commands::Deliveries => cli::commands::deliveries::handle(cfg),
        Commands::Sales => cli::commands::sales::handle(cfg),
        Commands::Hours { .. } => cli::commands::hours::handle(&cli.command, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Resolve the connection settings once; a missing database setting is
    // fatal before any report logic executes.
    let cfg = Config::load(&cli.env_file, cli.db.as_ref())?;

    dispatch(&cli, &cfg)
}
