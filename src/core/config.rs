//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gridwalk/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GridwalkConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SubmissionConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/api/result";
pub const DEFAULT_LOG_FILE: &str = "gridwalk.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values that came from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gridwalk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gridwalk").join("config.toml"))
}

/// Load config from `~/.gridwalk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GridwalkConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GridwalkConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GridwalkConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GridwalkConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<GridwalkConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GridwalkConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Gridwalk Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [submission]
# endpoint = "http://localhost:9000/api/result"   # Or set GRIDWALK_ENDPOINT

# [logging]
# level = "debug"          # "off", "error", "warn", "info", "debug", "trace"
# file = "gridwalk.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GridwalkConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &GridwalkConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("GRIDWALK_ENDPOINT"))
        .or_else(|| config.submission.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Log level: CLI → env → config → default. Unknown names fall back too.
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("GRIDWALK_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Unknown log level '{}', using default", level);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file: PathBuf = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into();

    ResolvedConfig {
        endpoint,
        log_level,
        log_file,
    }
}
