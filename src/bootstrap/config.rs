//! # Configuration Loader / 配置加载器
//!
//! `load_config` reads the TOML file as-is; `resolve_config` is the single
//! place where empty values are replaced by defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use ct_app::DispatchEventBus;
use ct_core::config::AppConfig;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file. No validation is performed.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Application data directory, e.g. `~/.local/share/cliptrans`.
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("cliptrans"))
        .context("Could not determine the user data directory")
}

/// Load the explicit config file, or the one in `data_dir` if present, and
/// fill every empty value with its default.
pub fn resolve_config(explicit: Option<&Path>, data_dir: &Path) -> anyhow::Result<AppConfig> {
    let loaded = match explicit {
        Some(path) => load_config(path)?,
        None => {
            let default_path = data_dir.join(CONFIG_FILE_NAME);
            if default_path.exists() {
                load_config(&default_path)?
            } else {
                AppConfig::empty()
            }
        }
    };
    Ok(apply_defaults(loaded, data_dir))
}

fn apply_defaults(config: AppConfig, data_dir: &Path) -> AppConfig {
    let defaults = AppConfig::with_system_defaults(data_dir.to_path_buf());
    AppConfig {
        rules_path: non_empty_path(config.rules_path, defaults.rules_path),
        log_dir: non_empty_path(config.log_dir, defaults.log_dir),
        translator_endpoint: if config.translator_endpoint.is_empty() {
            ct_infra::translation::DEFAULT_ENDPOINT.to_string()
        } else {
            config.translator_endpoint
        },
        translator_timeout_secs: match config.translator_timeout_secs {
            0 => ct_infra::translation::DEFAULT_TIMEOUT.as_secs(),
            secs => secs,
        },
        event_capacity: match config.event_capacity {
            0 => DispatchEventBus::DEFAULT_CAPACITY,
            capacity => capacity,
        },
    }
}

fn non_empty_path(value: PathBuf, fallback: PathBuf) -> PathBuf {
    if value.as_os_str().is_empty() {
        fallback
    } else {
        value
    }
}

pub fn translator_timeout(config: &AppConfig) -> Duration {
    Duration::from_secs(config.translator_timeout_secs)
}
