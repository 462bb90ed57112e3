use crate::cli::parser::Commands;
use crate::core::ConvertLogic;
use crate::errors::AppResult;
use crate::utils::expand_tilde;

/// Handle the `columns` subcommand (mapping report only, nothing is written)
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Columns { input } = cmd {
        ConvertLogic::inspect(&expand_tilde(input))?;
    }
    Ok(())
}
