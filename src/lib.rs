//! projtrack library root.
//! Exposes the CLI parser, the high-level run() function, and the core
//! modules (auth, store, sync, filter, export).

pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod filter;
pub mod models;
pub mod store;
pub mod sync;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, &cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, &cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, &cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, &cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, &cli.command, cfg),
    }
}

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; the CLI may override the store path.
    let mut cfg = Config::load();
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    dispatch(&cli, &cfg)
}
