//! rTimesheet library root.
//! Exposes the CLI parser, the high-level run() function and the
//! import → transform → filter → aggregate → export pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg_path: &Path, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cfg_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg_path, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path: PathBuf = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&cfg_path)?,
    };

    dispatch(&cli, &cfg_path, &cfg)
}
