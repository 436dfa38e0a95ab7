// crates/domain/src/config.rs
use serde_json::{Map, Value};

use latest_migration_shared_kernel::{DomainError, DomainResult};

use crate::layout::DEFAULT_MIGRATIONS_DIR;

/// Default database CLI, invoked as `<db_cli> db shell <db_name>`.
pub const DEFAULT_DB_CLI: &str = "turso";

/// Validated settings consumed by the resolver and the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Relative values are joined onto the working directory by the resolver.
    pub migrations_dir: String,
    pub db_name: Option<String>,
    pub auto_confirm: bool,
    pub db_cli: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            migrations_dir: DEFAULT_MIGRATIONS_DIR.to_string(),
            db_name: None,
            auto_confirm: false,
            db_cli: DEFAULT_DB_CLI.to_string(),
        }
    }
}

/// Each setting is looked up under its camelCase name first, then its
/// `.env`-style upper snake case alias.
const MIGRATIONS_DIR_KEYS: [&str; 2] = ["migrationsDir", "MIGRATIONS_DIR"];
const DB_NAME_KEYS: [&str; 2] = ["dbName", "DB_NAME"];
const AUTO_CONFIRM_KEYS: [&str; 2] = ["autoConfirm", "AUTO_CONFIRM"];
const DB_CLI_KEYS: [&str; 2] = ["dbCli", "DB_CLI"];

impl AppConfig {
    /// Validate a merged key/value map, applying defaults for absent keys.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidConfiguration` listing every problem found.
    pub fn from_values(values: &Map<String, Value>) -> DomainResult<Self> {
        let mut issues = Vec::new();
        let defaults = Self::default();

        let migrations_dir = match lookup(values, &MIGRATIONS_DIR_KEYS) {
            None => defaults.migrations_dir,
            Some((key, value)) => non_empty_string(key, value, &mut issues).unwrap_or_default(),
        };
        let db_name = lookup(values, &DB_NAME_KEYS)
            .and_then(|(key, value)| non_empty_string(key, value, &mut issues));
        let auto_confirm = match lookup(values, &AUTO_CONFIRM_KEYS) {
            None => defaults.auto_confirm,
            Some((key, value)) => flag(key, value, &mut issues).unwrap_or_default(),
        };
        let db_cli = match lookup(values, &DB_CLI_KEYS) {
            None => defaults.db_cli,
            Some((key, value)) => non_empty_string(key, value, &mut issues).unwrap_or_default(),
        };

        if issues.is_empty() {
            Ok(Self { migrations_dir, db_name, auto_confirm, db_cli })
        } else {
            Err(DomainError::InvalidConfiguration { issues })
        }
    }
}

fn lookup<'a>(values: &'a Map<String, Value>, keys: &[&'static str]) -> Option<(&'static str, &'a Value)> {
    keys.iter()
        .find_map(|key| values.get(*key).filter(|v| !v.is_null()).map(|v| (*key, v)))
}

fn non_empty_string(key: &str, value: &Value, issues: &mut Vec<String>) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::String(_) => {
            issues.push(format!("{key}: must not be empty"));
            None
        }
        other => {
            issues.push(format!("{key}: expected a string, got {other}"));
            None
        }
    }
}

fn flag(key: &str, value: &Value, issues: &mut Vec<String>) -> Option<bool> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    };
    if parsed.is_none() {
        issues.push(format!("{key}: expected a boolean, got {value}"));
    }
    parsed
}
