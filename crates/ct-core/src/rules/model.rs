use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::key::RuleId;
use crate::translation::LanguagePair;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

const SCHEMA_VERSION_KEY: &str = "schemaVersion";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RuleError {
    #[error("invalid value for rule {rule}: expected {expected}, got {value}")]
    InvalidValue {
        rule: String,
        expected: &'static str,
        value: Value,
    },

    #[error("rule key is reserved: {0}")]
    Reserved(String),
}

/// The persisted rule document.
///
/// Known rules are typed fields; every other key lands in `extra` and is
/// written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rules {
    /// Documents written before versioning carry no version and read as 0.
    #[serde(default)]
    pub schema_version: u32,

    #[serde(rename = "isListen")]
    pub listen: bool,

    #[serde(rename = "isDete")]
    pub delete_on_translate: bool,

    pub auto_copy: bool,

    pub source: String,

    pub target: String,

    pub locale: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Rules {
    pub fn language_pair(&self) -> LanguagePair {
        LanguagePair::new(self.source.clone(), self.target.clone())
    }

    /// Current value of a rule, `None` for unknown keys never written.
    pub fn get(&self, rule: &RuleId) -> Option<Value> {
        match rule {
            RuleId::Listen => Some(Value::Bool(self.listen)),
            RuleId::DeleteOnTranslate => Some(Value::Bool(self.delete_on_translate)),
            RuleId::AutoCopy => Some(Value::Bool(self.auto_copy)),
            RuleId::Source => Some(Value::String(self.source.clone())),
            RuleId::Target => Some(Value::String(self.target.clone())),
            RuleId::Locale => Some(Value::String(self.locale.clone())),
            RuleId::PassThrough(key) => self.extra.get(key).cloned(),
        }
    }

    /// Write a rule value.
    ///
    /// Known rules are type-checked. Unknown keys are stored as-is.
    pub fn set(&mut self, rule: &RuleId, value: Value) -> Result<(), RuleError> {
        match rule {
            RuleId::Listen => self.listen = expect_bool(rule, value)?,
            RuleId::DeleteOnTranslate => self.delete_on_translate = expect_bool(rule, value)?,
            RuleId::AutoCopy => self.auto_copy = expect_bool(rule, value)?,
            RuleId::Source => self.source = expect_string(rule, value)?,
            RuleId::Target => self.target = expect_string(rule, value)?,
            RuleId::Locale => self.locale = expect_string(rule, value)?,
            RuleId::PassThrough(key) => {
                if key == SCHEMA_VERSION_KEY {
                    return Err(RuleError::Reserved(key.clone()));
                }
                self.extra.insert(key.clone(), value);
            }
        }
        Ok(())
    }
}

fn expect_bool(rule: &RuleId, value: Value) -> Result<bool, RuleError> {
    value.as_bool().ok_or_else(|| RuleError::InvalidValue {
        rule: rule.key().to_string(),
        expected: "boolean",
        value,
    })
}

fn expect_string(rule: &RuleId, value: Value) -> Result<String, RuleError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s),
        other => Err(RuleError::InvalidValue {
            rule: rule.key().to_string(),
            expected: "non-empty string",
            value: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_known_rule_updates_typed_field() {
        let mut rules = Rules::default();

        rules.set(&RuleId::Listen, json!(false)).unwrap();
        rules.set(&RuleId::Target, json!("de")).unwrap();

        assert!(!rules.listen);
        assert_eq!(rules.language_pair(), LanguagePair::new("auto", "de"));
        assert_eq!(rules.get(&RuleId::Listen), Some(json!(false)));
    }

    #[test]
    fn set_rejects_wrong_type_for_known_rule() {
        let mut rules = Rules::default();

        let err = rules.set(&RuleId::Listen, json!("yes")).unwrap_err();

        assert!(matches!(err, RuleError::InvalidValue { expected: "boolean", .. }));
        assert!(rules.listen, "value must be unchanged on rejection");
    }

    #[test]
    fn set_rejects_blank_language_code() {
        let mut rules = Rules::default();

        assert!(rules.set(&RuleId::Source, json!("  ")).is_err());
        assert_eq!(rules.source, "auto");
    }

    #[test]
    fn unknown_rule_is_stored_verbatim() {
        let mut rules = Rules::default();
        let rule = RuleId::from_key("frameMode");

        rules.set(&rule, json!({"width": 300})).unwrap();

        assert_eq!(rules.get(&rule), Some(json!({"width": 300})));
    }

    #[test]
    fn schema_version_key_is_reserved() {
        let mut rules = Rules::default();
        let err = rules
            .set(&RuleId::from_key("schemaVersion"), json!(99))
            .unwrap_err();
        assert_eq!(err, RuleError::Reserved("schemaVersion".to_string()));
    }

    #[test]
    fn unknown_keys_survive_serialization() {
        let raw = json!({
            "schemaVersion": 1,
            "isListen": false,
            "source": "en",
            "target": "fr",
            "frameMode": "compact"
        });

        let rules: Rules = serde_json::from_value(raw).unwrap();
        assert!(!rules.listen);
        assert_eq!(rules.extra.get("frameMode"), Some(&json!("compact")));
        // Missing fields fall back to defaults
        assert_eq!(rules.locale, "en");

        let back = serde_json::to_value(&rules).unwrap();
        assert_eq!(back["frameMode"], json!("compact"));
        assert_eq!(back["isDete"], json!(false));
    }

    #[test]
    fn unversioned_document_reads_as_version_zero() {
        let rules: Rules = serde_json::from_value(json!({ "is_listen": false })).unwrap();

        assert_eq!(rules.schema_version, 0);
        assert!(rules.listen, "legacy key is not interpreted here");
        assert_eq!(rules.extra.get("is_listen"), Some(&json!(false)));
    }
}
