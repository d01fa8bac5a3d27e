//! # Pure Data Module / 纯数据模块
//!
//! ## Responsibilities / 职责
//!
//! - Define the application configuration data structure
//! - Provide the TOML → DTO mapping
//!
//! This module contains data only: no validation, no policy. Empty values are
//! facts, filled in later by the bootstrap layer.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Rule document path (no existence check)
    pub rules_path: PathBuf,

    /// Directory for the rolling log file
    pub log_dir: PathBuf,

    /// Base URL of the translation endpoint (may be empty)
    pub translator_endpoint: String,

    /// Provider-side HTTP timeout in seconds, 0 means unset
    pub translator_timeout_secs: u64,

    /// Capacity of the dispatch event bus, 0 means unset
    pub event_capacity: usize,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing sections and keys map to empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_str = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let section_int = |section: &str, key: &str| -> i64 {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
        };

        Ok(Self {
            rules_path: PathBuf::from(section_str("rules", "path")),
            log_dir: PathBuf::from(section_str("logging", "dir")),
            translator_endpoint: section_str("translator", "endpoint"),
            translator_timeout_secs: section_int("translator", "timeout_secs").max(0) as u64,
            event_capacity: section_int("events", "capacity").max(0) as usize,
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            rules_path: PathBuf::new(),
            log_dir: PathBuf::new(),
            translator_endpoint: String::new(),
            translator_timeout_secs: 0,
            event_capacity: 0,
        }
    }

    /// Create AppConfig with paths rooted at the given data directory.
    ///
    /// The directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            rules_path: data_dir.join("rules.json"),
            log_dir: data_dir.join("logs"),
            ..Self::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [rules]
            path = "/tmp/cliptrans/rules.json"

            [logging]
            dir = "/tmp/cliptrans/logs"

            [translator]
            endpoint = "http://localhost:9000"
            timeout_secs = 5

            [events]
            capacity = 32
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.rules_path, PathBuf::from("/tmp/cliptrans/rules.json"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/cliptrans/logs"));
        assert_eq!(config.translator_endpoint, "http://localhost:9000");
        assert_eq!(config.translator_timeout_secs, 5);
        assert_eq!(config.event_capacity, 32);
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[rules]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty values are valid "facts"
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_negative_numbers_are_treated_as_unset() {
        let toml_value: Value = toml::from_str(
            r#"
            [translator]
            timeout_secs = -3
        "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.translator_timeout_secs, 0);
    }

    #[test]
    fn test_with_system_defaults_roots_paths() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/data/cliptrans"));

        assert_eq!(config.rules_path, PathBuf::from("/data/cliptrans/rules.json"));
        assert_eq!(config.log_dir, PathBuf::from("/data/cliptrans/logs"));
        assert!(config.translator_endpoint.is_empty());
    }
}
