use crate::auth::policy;
use crate::cli::commands::login;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::project::ProjectRecord;
use crate::store::ProjectStore;
use crate::sync::push_after_mutation;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new project. Creation is admin-only: there is no record yet whose
/// team could grant anyone else the right.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
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

        if !policy::can_create(&session) {
            return Err(AppError::Denied(
                "only admin may add new projects".to_string(),
            ));
        }

        let start = date::parse_date(start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;
        let end = date::parse_date(end).ok_or_else(|| AppError::InvalidDate(end.clone()))?;

        let record = ProjectRecord {
            year: *year,
            code: code.trim().to_string(),
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            start,
            end,
            team: team.trim().to_string(),
        };

        let store = ProjectStore::new(&cfg.store);
        let _guard = store.lock()?;

        let index = store.append(record)?;
        success(format!("Project added at row {index}."));

        push_after_mutation(cfg, store.path(), "Add project");
    }
    Ok(())
}
