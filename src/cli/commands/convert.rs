use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ConvertLogic;
use crate::errors::AppResult;
use crate::utils::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        output,
        force,
    } = cmd
    {
        let input = expand_tilde(input);
        let output = output.as_deref().map(expand_tilde);
        ConvertLogic::convert(&input, output.as_deref(), cfg, *force)?;
    }
    Ok(())
}
