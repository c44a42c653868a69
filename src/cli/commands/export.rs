use crate::cli::commands::{login, parse_location_filter, parse_year_filter};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::filter::ProjectFilter;
use crate::store::ProjectStore;

/// Export the filtered view, or a single row as a calendar event.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        year,
        location,
        query,
        row,
        force,
    } = cmd
    {
        let _session = login(cli, cfg)?;

        let store = ProjectStore::new(&cfg.store);
        let records = store.load()?;

        if let Some(row) = row {
            // Single-row calendar export addresses the full table by
            // ordinal, like edit/del do.
            if !matches!(format, ExportFormat::Ics) {
                return Err(AppError::InvalidExportFormat(format!(
                    "--row only applies to ics, not {}",
                    format.as_str()
                )));
            }
            let record = records.get(*row).ok_or(AppError::InvalidRow(*row))?;
            return ExportLogic::export(
                std::slice::from_ref(record),
                &ProjectFilter::default(),
                ExportFormat::Ics,
                file,
                *force,
            );
        }

        let filter = ProjectFilter::new(
            parse_year_filter(year)?,
            parse_location_filter(location),
            query.clone(),
        );

        ExportLogic::export(&records, &filter, format.clone(), file, *force)?;
    }
    Ok(())
}
