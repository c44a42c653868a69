use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};

use std::process::Command;

/// Handle the `config` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?
            );
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited with '{editor_to_use}'"));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            success(format!("Configuration edited with '{default_editor}'"));
                        }
                        Ok(_) | Err(_) => {
                            error(format!(
                                "Failed to edit configuration with fallback '{default_editor}'"
                            ));
                            return Err(AppError::ConfigSave);
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
