//! punchclock library root.
//! Exposes the CLI parser, the high-level run() function and the time-entry
//! engine (clock state, week grouping, report rendering, entry editing).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let employee = cli.employee.as_deref();

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(&cli.command, cfg, employee),
        Commands::Punch => cli::commands::punch::handle(&cli.command, cfg, employee),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, employee),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, employee),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, employee),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, employee),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db wins over the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
