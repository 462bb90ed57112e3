//! wh2csv library root.
//! Exposes the CLI parser, the high-level run() function and the conversion
//! pipeline (import → core → export).

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
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Columns { .. } => cli::commands::columns::handle(&cli.command),
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);

    // 2️⃣ risolve il file di configurazione (--config ha la precedenza)
    let config_path = cli
        .config
        .as_deref()
        .map(utils::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli.command, &config_path);
    }

    // 3️⃣ carica config UNA sola volta
    let cfg = Config::load_from(&config_path)?;

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg, &config_path)
}
