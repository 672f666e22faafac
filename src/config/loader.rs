//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BULLS_COWS_CONFIG";

/// Environment variable supplying a fixed RNG seed.
pub const SEED_ENV_VAR: &str = "BULLS_COWS_SEED";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config path exists but is not a regular file.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, I/O failure).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bulls-cows/config.toml`.
///
/// ```toml
/// seed = 42
/// log_file_path = "/tmp/bulls-cows.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Fixed seed for secret generation.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// RNG seed. `None` means seed from OS entropy.
    pub seed: Option<u64>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bulls-cows/bulls-cows.log` on Linux, or the
/// platform state directory elsewhere. Falls back to the current directory
/// if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bulls-cows").join("bulls-cows.log")
    } else {
        PathBuf::from("bulls-cows.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/bulls-cows/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bulls-cows").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the path is a directory, or the file cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    if path.is_dir() {
        return Err(ConfigError::InvalidPath(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BULLS_COWS_CONFIG` environment variable
/// 3. Default path `~/.config/bulls-cows/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        seed: config.seed.or(defaults.seed),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// An environment variable that was set but could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    /// Name of the environment variable.
    pub var: &'static str,
    /// Raw value found in the environment.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl RejectedOverride {
    /// Emit the rejection as a `WARN` event.
    pub fn warn(&self) {
        warn!(
            value = %self.value,
            reason = %self.reason,
            "Ignoring invalid {}",
            self.var
        );
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BULLS_COWS_SEED`: Override the RNG seed. A value that is not a `u64`
///   leaves the seed unchanged and is returned as a [`RejectedOverride`].
///
/// Config is resolved before the tracing subscriber is installed, so
/// rejections are returned rather than logged. Call
/// [`RejectedOverride::warn`] once logging is up.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<RejectedOverride>) {
    let mut rejected = Vec::new();

    if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(e) => rejected.push(RejectedOverride {
                var: SEED_ENV_VAR,
                value: raw,
                reason: e.to_string(),
            }),
        }
    }

    (config, rejected)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually
/// passed (`Some`) override.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    seed_override: Option<u64>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
