use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    allocation::{strategy::AllocationStrategy, types::Budget},
    platform::PlatformConfig,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogSourceConfig,
    pub budget: BudgetConfig,
    #[serde(default)]
    pub strategy: AllocationStrategy,
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogSourceConfig {
    File { path: PathBuf },
    Platform { book_id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub coins: u64,
    pub fastpass: usize,
    #[serde(default)]
    pub max_coin_spend: Option<u64>,
}

impl BudgetConfig {
    pub fn budget(&self) -> Budget {
        Budget::new(self.coins, self.fastpass).with_coin_cap(self.max_coin_spend)
    }
}

fn default_enabled_true() -> bool {
    true
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema_path = resolve_schema_path(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema_path)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize config")?;

        if let CatalogSourceConfig::File { path } = &mut config.catalog
            && !path.is_absolute()
        {
            *path = config_base.join(&*path);
        }

        config
            .strategy
            .validate()
            .map_err(|err| anyhow!("invalid strategy: {err}"))?;

        Ok(config)
    }
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Result<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Ok(configured);
        }
        return Ok(config_base.join(&configured));
    }

    let local_default = config_base.join("unlocker.schema.json");
    if local_default.exists() {
        return Ok(local_default);
    }

    Err(anyhow!(
        "unable to resolve schema path: expected $schema in config or unlocker.schema.json"
    ))
}

fn validate_against_schema(config_value: &Value, schema_path: &Path) -> Result<()> {
    let schema_content = fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    let schema: Value = serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))?;

    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("failed to compile schema {}: {err}", schema_path.display()))?;

    if let Err(errors) = compiled.validate(config_value) {
        let violations: Vec<String> = errors.map(|error| describe_violation(&error)).collect();
        return Err(anyhow!("config validation failed: {}", violations.join("; ")));
    }

    Ok(())
}

/// Prefixes a violation with the JSON pointer of the offending value, e.g. `/budget/coins`.
fn describe_violation(error: &ValidationError<'_>) -> String {
    let location = error.instance_path.to_string();
    if location.is_empty() {
        error.to_string()
    } else {
        format!("{location}: {error}")
    }
}
