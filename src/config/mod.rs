use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::models::account::Role;

/// Remote sync target: a GitHub-style repository plus branch and token.
/// Repo and token are both required for sync to run; absence of either makes
/// every push a documented no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            repo: None,
            branch: default_branch(),
            token: None,
        }
    }
}

fn default_branch() -> String {
    "main".to_string()
}

/// One entry of the `users` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEntry {
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Viewer
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the projects workbook.
    pub store: String,
    #[serde(default)]
    pub remote: RemoteConfig,
    /// username -> {password, role}. Consumed once at startup.
    #[serde(default)]
    pub users: BTreeMap<String, AccountEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            remote: RemoteConfig::default(),
            users: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("projtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".projtrack")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("projtrack.conf")
    }

    /// Default full path of the projects workbook.
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("projects.xlsx")
    }

    /// Load configuration from file, or return defaults if absent or
    /// unreadable. A broken config never blocks startup; the credential
    /// fallback in `auth::accounts` keeps the tool usable.
    pub fn load() -> Self {
        let path = Self::config_file();
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Initialize configuration and store files.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("Config file: {:?}", Self::config_file());
        }

        crate::store::ProjectStore::new(&store_path).ensure_schema()?;
        println!("Store:       {:?}", store_path);

        Ok(())
    }
}
