use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with default values to `path`. An existing
/// file is only replaced with `--force`.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            return Err(AppError::Config(format!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        info("Initializing wh2csv…");
        Config::default().save_to(path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
