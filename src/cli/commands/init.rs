use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config file and an empty projects workbook.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;
    success("Initialization complete.");
    Ok(())
}
