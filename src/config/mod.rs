//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{path::PathBuf, str::FromStr};

use config::{Config, Environment, File, FileFormat};
use directories::BaseDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub use cli::CliArgs;

const DEFAULT_CONFIG_FILENAME: &str = ".statuspage.yml";
const ENV_PREFIX: &str = "STATUSPAGE";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

#[derive(Debug, Clone)]
pub struct Settings {
    pub token: String,
    pub base_url: String,
    pub page: String,
    pub logging: LoggingSettings,
    pub latest_incident: IncidentOrder,
}

impl Settings {
    /// Account root prefixing every API call: `base_url` immediately followed by `page`.
    pub fn account_url(&self) -> String {
        format!("{}{}", self.base_url, self.page)
            .trim_end_matches('/')
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Which unresolved incident `incidents update` targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IncidentOrder {
    /// First unresolved incident in the order the API lists them.
    #[default]
    Api,
    /// Unresolved incident with the latest `created_at`.
    Newest,
}

impl FromStr for IncidentOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "newest" => Ok(Self::Newest),
            other => Err(format!("expected `api` or `newest`, got `{other}`")),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("could not determine the home directory; pass --config-file")]
    HomeDir,
    #[error("missing required configuration key `{key}`")]
    Missing { key: &'static str },
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let path = match cli.config_file.as_ref() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let mut raw: RawSettings = Config::builder()
        .add_source(
            File::from(path.as_path())
                .format(FileFormat::Yaml)
                .required(true),
        )
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()?;

    raw.apply_cli_overrides(cli);
    Settings::from_raw(raw)
}

fn default_config_path() -> Result<PathBuf, LoadError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DEFAULT_CONFIG_FILENAME))
        .ok_or(LoadError::HomeDir)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    oauth: Option<String>,
    base_url: Option<String>,
    page: Option<String>,
    logging: RawLoggingSettings,
    latest_incident: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = cli.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let token = required(raw.oauth, "oauth")?;
        let base_url = required(raw.base_url, "base_url")?;
        let page = required(raw.page, "page")?;
        let logging = build_logging_settings(raw.logging)?;
        let latest_incident = match raw.latest_incident {
            Some(value) => value
                .parse::<IncidentOrder>()
                .map_err(|reason: String| LoadError::invalid("latest_incident", reason))?,
            None => IncidentOrder::default(),
        };

        Ok(Self {
            token,
            base_url,
            page,
            logging,
            latest_incident,
        })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, LoadError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(LoadError::Missing { key })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => DEFAULT_LOG_LEVEL,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}
