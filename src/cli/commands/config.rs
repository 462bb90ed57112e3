use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config, path: print_path } = cmd {
        // ---- PRINT PATH ----
        if *print_path {
            println!("{}", path.display());
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*print_path {
            if !path.exists() {
                println!("# {} not found, using defaults", path.display());
            }
            print!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
