//! Store application configuration that gets read from disk
use crate::db::db_path;
use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use simplelog::LevelFilter;
use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;
use std::str::FromStr;

static CONFIG_DIR_NAME: &str = "route-tracker";
static CONFIG_FILE_NAME: &str = "config.yml";

/// Configuration struct that we can create from the config file used
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(
        deserialize_with = "deserialize_level_filter",
        serialize_with = "serialize_level_filter",
        default = "default_level_filter"
    )]
    log_level: LevelFilter,
    #[serde(default)]
    database: Option<PathBuf>,
    #[serde(default = "default_confirm_delete")]
    confirm_delete: bool,
}

impl Config {
    pub fn load<T: Read>(source: &mut T) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(source)
    }

    /// Read the config file from the user's config directory, falling back to defaults if
    /// it does not exist
    pub fn load_default_file() -> Result<Self, Error> {
        let path = config_file();
        if !path.exists() {
            return Ok(Config::default());
        }
        let mut fp = File::open(&path)?;
        Config::load(&mut fp).map_err(|e| {
            Error::InvalidConfigurationValue(format!(
                "could not parse config file {:?}: {}",
                path, e
            ))
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Path to the route database, the platform data directory is used if not configured
    pub fn database(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(db_path)
    }

    pub fn confirm_delete(&self) -> bool {
        self.confirm_delete
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_level_filter(),
            database: None,
            confirm_delete: default_confirm_delete(),
        }
    }
}

/// Location of the config file
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(PathBuf::new)
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

fn deserialize_level_filter<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let buf = String::deserialize(deserializer)?;
    LevelFilter::from_str(&buf)
        .map_err(|_| serde::de::Error::custom(format!("invalid level value: {}", buf)))
}

fn serialize_level_filter<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&level.to_string())
}

fn default_level_filter() -> LevelFilter {
    LevelFilter::Info
}

fn default_confirm_delete() -> bool {
    true
}
