//! Configuration file support for evidence-dashboard.
//!
//! Provides YAML-based configuration through `evidence-dashboard.config.yml`
//! files, and resolves the effective settings for a run from command-line
//! values layered over the config file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::application::dto::OutputFormat;
use crate::application::factories::{FeedLocation, FeedSourceFactory};
use crate::evidence::domain::{FeedDialect, FilterState};
use crate::shared::error::DashboardError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "evidence-dashboard.config.yml";

/// Default HTTP timeout when neither the CLI nor the config file sets one
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub feed: Option<String>,
    pub dialect: Option<String>,
    pub format: Option<String>,
    pub env: Option<String>,
    pub test: Option<String>,
    pub output: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The config file's values as a settings layer
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            feed: self.feed.clone(),
            dialect: self.dialect.clone(),
            format: self.format.clone(),
            env: self.env.clone(),
            test: self.test.clone(),
            output: self.output.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// One layer of optional settings (command line or config file)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub feed: Option<String>,
    pub dialect: Option<String>,
    pub format: Option<String>,
    pub env: Option<String>,
    pub test: Option<String>,
    pub output: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl SettingsOverrides {
    /// Fills every unset value in `self` from `fallback`
    pub fn or(self, fallback: SettingsOverrides) -> SettingsOverrides {
        SettingsOverrides {
            feed: self.feed.or(fallback.feed),
            dialect: self.dialect.or(fallback.dialect),
            format: self.format.or(fallback.format),
            env: self.env.or(fallback.env),
            test: self.test.or(fallback.test),
            output: self.output.or(fallback.output),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
        }
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub feed: FeedLocation,
    pub dialect: FeedDialect,
    pub format: OutputFormat,
    pub filter: FilterState,
    pub output: Option<PathBuf>,
    pub timeout: Duration,
}

impl Settings {
    /// Resolves settings from a layer, applying defaults for unset values
    pub fn resolve(overrides: SettingsOverrides) -> Result<Self> {
        let dialect = match overrides.dialect.as_deref() {
            Some(value) => parse_setting::<FeedDialect>("dialect", value)?,
            None => FeedDialect::default(),
        };
        let format = match overrides.format.as_deref() {
            Some(value) => parse_setting::<OutputFormat>("format", value)?,
            None => OutputFormat::default(),
        };
        let timeout_secs = overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        validate_timeout(timeout_secs)?;

        Ok(Self {
            feed: overrides
                .feed
                .as_deref()
                .map(FeedLocation::parse)
                .unwrap_or_default(),
            dialect,
            format,
            filter: FilterState::new(overrides.env, overrides.test),
            output: overrides.output.map(PathBuf::from),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Creates the feed source these settings point at
    pub fn feed_source(&self) -> Result<Box<dyn crate::ports::outbound::FeedSource>> {
        FeedSourceFactory::create(self.feed.clone(), self.timeout)
    }
}

fn parse_setting<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(message) => Err(DashboardError::Validation {
            message: format!("{}\n\n💡 Hint: Check the '{}' setting.", message, name),
        }
        .into()),
    }
}

fn validate_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 {
        return Err(DashboardError::Validation {
            message: "timeout_secs must be greater than 0.\n\n\
                      💡 Hint: Use a value such as 10 (seconds)."
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(dialect) = config.dialect.as_deref() {
        parse_setting::<FeedDialect>("dialect", dialect)?;
    }
    if let Some(format) = config.format.as_deref() {
        parse_setting::<OutputFormat>("format", format)?;
    }
    if let Some(timeout_secs) = config.timeout_secs {
        validate_timeout(timeout_secs)?;
    }
    if let Some(feed) = config.feed.as_deref() {
        if feed.trim().is_empty() {
            bail!(
                "Invalid config: feed must not be empty.\n\n\
                 💡 Hint: Use a path such as ./evidence/index.json or an https:// URL."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
