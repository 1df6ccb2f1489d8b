//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sideline/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::route::Route;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SidelineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<String>,
    /// "off", "error", "warn", "info", "debug" or "trace".
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataConfig {
    pub catalog_path: Option<PathBuf>,
    pub load_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_route: Route,
    pub log_level: LevelFilter,
    /// `None` means the roster bundled with the binary.
    pub catalog_path: Option<PathBuf>,
    pub load_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_route: Route::root(),
            log_level: DEFAULT_LOG_LEVEL,
            catalog_path: None,
            load_timeout_secs: DEFAULT_LOAD_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub start_route: Option<String>,
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

/// Returns the path to `~/.sideline/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sideline").join("config.toml"))
}

/// Load config from `~/.sideline/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SidelineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SidelineConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SidelineConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SidelineConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SidelineConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SidelineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# Sideline Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "/athlete"           # Or set SIDELINE_START_ROUTE, or pass --route
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [data]
# catalog_path = "/path/to/catalog.json"   # Or set SIDELINE_CATALOG, or pass --catalog
# load_timeout_secs = 10
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SidelineConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with the environment lookup supplied by the caller.
pub fn resolve_with_env(
    config: &SidelineConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start route: CLI → env → config → default
    let start_route = cli
        .start_route
        .clone()
        .or_else(|| env("SIDELINE_START_ROUTE"))
        .or_else(|| config.general.start_route.clone())
        .and_then(|raw| match Route::parse(raw) {
            Ok(route) => Some(route),
            Err(e) => {
                warn!("Ignoring start route: {}", e);
                None
            }
        })
        .unwrap_or_else(Route::root);

    // Catalog: CLI → env → config → bundled
    let catalog_path = cli
        .catalog_path
        .clone()
        .or_else(|| env("SIDELINE_CATALOG").map(PathBuf::from))
        .or_else(|| config.data.catalog_path.clone());

    let log_level = match config.general.log_level.as_deref() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        start_route,
        log_level,
        catalog_path,
        load_timeout_secs: config
            .data
            .load_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_LOAD_TIMEOUT_SECS),
    }
}
