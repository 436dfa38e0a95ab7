// crates/infra/src/config.rs
use std::path::{Path, PathBuf};

use latest_migration_domain::AppConfig;
use latest_migration_shared_kernel::{InfraResult, InfrastructureError, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILENAME: &str = "default-config.json";
pub const DEFAULT_ENV_FILENAME: &str = ".env";

/// Loads `AppConfig` from a JSON file and a `.env` file.
///
/// Both sources are optional. Keys from `.env` override keys from the JSON
/// file. A source that cannot be read or parsed is logged and skipped; only
/// validation of the merged values can fail the load.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    env_path: PathBuf,
}

impl ConfigLoader {
    /// Look for `default-config.json` and `.env` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config_path: dir.join(DEFAULT_CONFIG_FILENAME),
            env_path: dir.join(DEFAULT_ENV_FILENAME),
        }
    }

    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// # Errors
    /// Returns `DomainError::InvalidConfiguration` when the merged values do
    /// not validate.
    pub fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::from_values(&self.load_values())?)
    }

    /// Merged raw values, `.env` taking precedence.
    pub fn load_values(&self) -> Map<String, Value> {
        let mut values = Map::new();
        for (source, loaded) in [
            (&self.config_path, read_json_config(&self.config_path)),
            (&self.env_path, read_env_file(&self.env_path)),
        ] {
            match loaded {
                Ok(Some(map)) => {
                    debug!(path = %source.display(), keys = map.len(), "loaded config source");
                    values.extend(map);
                }
                Ok(None) => {}
                Err(e) => warn!("Error loading config from {}: {e}", source.display()),
            }
        }
        values
    }
}

fn read_json_config(path: &Path) -> InfraResult<Option<Map<String, Value>>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    let parse_err = |details: String| InfrastructureError::ConfigParse {
        format: "JSON".to_string(),
        path: path.to_path_buf(),
        details,
    };
    match serde_json::from_str::<Value>(&content).map_err(|e| parse_err(e.to_string()))? {
        Value::Object(map) => Ok(Some(map)),
        other => Err(parse_err(format!("expected an object, got {other}"))),
    }
}

fn read_env_file(path: &Path) -> InfraResult<Option<Map<String, Value>>> {
    if !path.exists() {
        return Ok(None);
    }
    let parse_err = |e: dotenvy::Error| InfrastructureError::ConfigParse {
        format: "dotenv".to_string(),
        path: path.to_path_buf(),
        details: e.to_string(),
    };
    let mut map = Map::new();
    for item in dotenvy::from_path_iter(path).map_err(parse_err)? {
        let (key, value) = item.map_err(parse_err)?;
        map.insert(key, Value::String(value));
    }
    Ok(Some(map))
}
