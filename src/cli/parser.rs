use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for projtrack:
/// a project registry shared through a spreadsheet workbook,
/// with role-based editing and export to xlsx / pdf / ics / csv / json.
#[derive(Parser)]
#[command(
    name = "projtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track projects in a shared spreadsheet: filter, edit with role-based rules, export",
    long_about = None
)]
pub struct Cli {
    /// Override the workbook path (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Username (or set PROJTRACK_USER)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Password (or set PROJTRACK_PASSWORD)
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the projects workbook
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List projects, optionally filtered
    List {
        #[arg(long = "year", help = "Exact year, or 'all'")]
        year: Option<String>,

        #[arg(long = "location", help = "Exact location, or 'all'")]
        location: Option<String>,

        #[arg(long = "query", help = "Substring search in code/name/location")]
        query: Option<String>,
    },

    /// Add a new project (admin only)
    Add {
        #[arg(long = "year")]
        year: i32,

        #[arg(long = "code")]
        code: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "location", default_value = "")]
        location: String,

        /// Project start date (YYYY-MM-DD)
        #[arg(long = "start")]
        start: String,

        /// Project end date (YYYY-MM-DD)
        #[arg(long = "end")]
        end: String,

        /// Comma-separated usernames allowed to edit this project
        #[arg(long = "team", default_value = "")]
        team: String,
    },

    /// Edit a project by row index (admin or team member)
    Edit {
        /// Row index from the most recent `list` (0-based)
        row: usize,

        #[arg(long = "year")]
        year: Option<i32>,

        #[arg(long = "code")]
        code: Option<String>,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        /// Project start date (YYYY-MM-DD)
        #[arg(long = "start")]
        start: Option<String>,

        /// Project end date (YYYY-MM-DD)
        #[arg(long = "end")]
        end: Option<String>,

        /// Comma-separated usernames allowed to edit this project
        #[arg(long = "team")]
        team: Option<String>,
    },

    /// Delete a project by row index (admin or team member)
    Del {
        /// Row index from the most recent `list` (0-based)
        row: usize,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export the (filtered) project list
    Export {
        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "file")]
        file: String,

        #[arg(long = "year", help = "Exact year, or 'all'")]
        year: Option<String>,

        #[arg(long = "location", help = "Exact location, or 'all'")]
        location: Option<String>,

        #[arg(long = "query", help = "Substring search in code/name/location")]
        query: Option<String>,

        /// Export a single row as a calendar event (ics only, 0-based)
        #[arg(long = "row")]
        row: Option<usize>,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
