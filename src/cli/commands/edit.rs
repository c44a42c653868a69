use crate::auth::policy;
use crate::cli::commands::login;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::ProjectStore;
use crate::sync::push_after_mutation;
use crate::ui::messages::success;
use crate::utils::date;

/// Edit a project by row index. Authorization is re-evaluated here against
/// the freshly loaded row: team membership may have changed since the last
/// list, so it is never carried over.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        row,
        year,
        code,
        name,
        location,
        start,
        end,
        team,
    } = cmd
    {
        let session = login(cli, cfg)?;

        let store = ProjectStore::new(&cfg.store);
        let _guard = store.lock()?;

        let records = store.load()?;
        let current = records.get(*row).ok_or(AppError::InvalidRow(*row))?;

        if !policy::can_mutate(&session, current) {
            return Err(AppError::Denied(format!(
                "user '{}' is not in the team of row {row}; ask an admin to add you to 'Project Team'",
                session.username()
            )));
        }

        let mut updated = current.clone();
        if let Some(y) = year {
            updated.year = *y;
        }
        if let Some(c) = code {
            updated.code = c.trim().to_string();
        }
        if let Some(n) = name {
            updated.name = n.trim().to_string();
        }
        if let Some(l) = location {
            updated.location = l.trim().to_string();
        }
        if let Some(s) = start {
            updated.start = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
        }
        if let Some(e) = end {
            updated.end = date::parse_date(e).ok_or_else(|| AppError::InvalidDate(e.clone()))?;
        }
        if let Some(t) = team {
            updated.team = t.trim().to_string();
        }

        store.update(*row, updated)?;
        success(format!("Row {row} updated."));

        push_after_mutation(cfg, store.path(), "Edit project");
    }
    Ok(())
}
