use crate::auth::policy;
use crate::cli::commands::login;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::ProjectStore;
use crate::sync::push_after_mutation;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user.
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Delete a project by row index. Remaining rows re-pack, so indices from a
/// previous `list` are stale after this succeeds.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { row, yes } = cmd {
        let session = login(cli, cfg)?;

        let store = ProjectStore::new(&cfg.store);
        let _guard = store.lock()?;

        let records = store.load()?;
        let target = records.get(*row).ok_or(AppError::InvalidRow(*row))?;

        if !policy::can_mutate(&session, target) {
            return Err(AppError::Denied(format!(
                "user '{}' is not in the team of row {row}",
                session.username()
            )));
        }

        if !*yes {
            let prompt = format!(
                "Delete row {row} ({} - {})? This action is irreversible.",
                target.code, target.name
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = store.delete(*row)?;
        success(format!("Deleted {} - {}.", removed.code, removed.name));

        push_after_mutation(cfg, store.path(), "Delete project");
    }
    Ok(())
}
