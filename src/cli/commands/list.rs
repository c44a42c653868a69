use crate::cli::commands::{login, parse_location_filter, parse_year_filter};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::filter::ProjectFilter;
use crate::models::project::COLUMNS;
use crate::store::ProjectStore;
use crate::utils::table::Table;

/// List the registry, filtered. The printed Row column is the ordinal
/// position in the full (unfiltered) table — the index `edit` and `del`
/// expect — and only stays valid until the next delete.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        year,
        location,
        query,
    } = cmd
    {
        let session = login(cli, cfg)?;
        println!(
            "Logged in as: {} ({})\n",
            session.username(),
            session.user.role.as_str()
        );

        let store = ProjectStore::new(&cfg.store);
        let records = store.load()?;

        let filter = ProjectFilter::new(
            parse_year_filter(year)?,
            parse_location_filter(location),
            query.clone(),
        );

        let mut headers = vec!["Row".to_string()];
        headers.extend(COLUMNS.iter().map(|c| c.to_string()));
        let mut table = Table::new(headers);

        let mut shown = 0;
        for (index, record) in records.iter().enumerate() {
            if !filter.matches(record) {
                continue;
            }
            let mut row = vec![index.to_string()];
            row.extend(record.to_row());
            table.add_row(row);
            shown += 1;
        }

        if shown == 0 {
            println!("No projects match.");
        } else {
            print!("{}", table.render());
            println!("\n{shown} of {} project(s).", records.len());
        }
    }
    Ok(())
}
