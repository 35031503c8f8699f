//! Core configuration loading.
//!
//! # Responsibility
//! - Provide a valid embedded default configuration.
//! - Read an optional TOML file and apply environment overrides.
//! - Convert instants to the facility's local calendar day.
//!
//! # Invariants
//! - A loaded config always has a representable UTC offset.

use crate::model::lifecycle::Timestamp;
use chrono::{FixedOffset, NaiveDate};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "CAREHOME_LOG_LEVEL";
/// Overrides `logging.dir`.
pub const ENV_LOG_DIR: &str = "CAREHOME_LOG_DIR";

const DEFAULT_CONFIG: &str = r#"
[logging]
level = "info"

[facility]
utc_offset_minutes = 540
"#;

const MAX_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub facility: FacilityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Absolute directory for rolling log files. File logging is off when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FacilityConfig {
    /// Facility local time offset from UTC, in minutes.
    #[serde(default = "default_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_offset_minutes(),
        }
    }
}

fn default_level() -> String {
    crate::logging::default_log_level().to_string()
}

fn default_offset_minutes() -> i32 {
    540
}

impl CoreConfig {
    /// Facility offset as a chrono timezone.
    pub fn facility_offset(&self) -> Result<FixedOffset, ConfigError> {
        offset_from_minutes(self.facility.utc_offset_minutes)
    }

    /// Calendar day at the facility for the instant `now`.
    pub fn facility_today(&self, now: Timestamp) -> Result<NaiveDate, ConfigError> {
        Ok(now.with_timezone(&self.facility_offset()?).date_naive())
    }
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    InvalidOffset(i32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidOffset(minutes) => write!(
                f,
                "facility.utc_offset_minutes must be within ±{MAX_OFFSET_MINUTES}, got {minutes}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidOffset(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Loads configuration from `path`, or the embedded default when `None`.
///
/// Environment overrides (`CAREHOME_LOG_LEVEL`, `CAREHOME_LOG_DIR`) apply
/// in both cases.
///
/// # Errors
/// - `ConfigError::Read` when the file cannot be read.
/// - `ConfigError::Parse` when TOML is malformed.
/// - `ConfigError::InvalidOffset` when the facility offset is out of range.
pub fn load_config(path: Option<&Path>) -> Result<CoreConfig, ConfigError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => DEFAULT_CONFIG.to_string(),
    };
    let config = parse_config(&text)?;
    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Parses and validates configuration text.
pub fn parse_config(text: &str) -> Result<CoreConfig, ConfigError> {
    let config: CoreConfig = toml::from_str(text)?;
    offset_from_minutes(config.facility.utc_offset_minutes)?;
    Ok(config)
}

/// Applies overrides read through `lookup`; blank values are ignored.
pub fn apply_env_overrides(
    mut config: CoreConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> CoreConfig {
    let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    if let Some(level) = non_blank(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    if let Some(dir) = non_blank(ENV_LOG_DIR) {
        config.logging.dir = Some(dir);
    }
    config
}

fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ConfigError> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(ConfigError::InvalidOffset(minutes));
    }
    FixedOffset::east_opt(minutes * 60).ok_or(ConfigError::InvalidOffset(minutes))
}
