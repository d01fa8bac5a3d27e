use std::collections::BTreeMap;

use super::model::*;

pub const DEFAULT_SOURCE_LANGUAGE: &str = "auto";
pub const DEFAULT_TARGET_LANGUAGE: &str = "zh-CN";
pub const DEFAULT_LOCALE: &str = "en";

impl Default for Rules {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            listen: true,
            delete_on_translate: false,
            auto_copy: false,
            source: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target: DEFAULT_TARGET_LANGUAGE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            extra: BTreeMap::new(),
        }
    }
}
