use std::fmt;

/// Canonical rule identifier.
///
/// 规则标识符。
///
/// Raw keys coming from the configuration UI are resolved exactly once through
/// [`RuleId::from_key`]. Keys that are not part of the schema become
/// [`RuleId::PassThrough`] and are still persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Whether clipboard signals are observed at all.
    Listen,
    /// Presentation clears the clipboard after showing a result.
    DeleteOnTranslate,
    /// Presentation writes the translation back to the clipboard.
    AutoCopy,
    /// Source language code.
    Source,
    /// Target language code.
    Target,
    /// UI locale.
    Locale,
    /// Any key outside the schema.
    PassThrough(String),
}

impl RuleId {
    /// Resolve a raw rule key.
    ///
    /// camelCase keys are canonical; snake_case aliases are accepted for the
    /// boolean rules.
    pub fn from_key(key: &str) -> Self {
        match key {
            "isListen" | "is_listen" | "listen" => RuleId::Listen,
            "isDete" | "is_dete" | "delete_on_translate" => RuleId::DeleteOnTranslate,
            "autoCopy" | "auto_copy" => RuleId::AutoCopy,
            "source" => RuleId::Source,
            "target" => RuleId::Target,
            "locale" => RuleId::Locale,
            other => RuleId::PassThrough(other.to_string()),
        }
    }

    /// Canonical raw key used in the persisted rule document.
    pub fn key(&self) -> &str {
        match self {
            RuleId::Listen => "isListen",
            RuleId::DeleteOnTranslate => "isDete",
            RuleId::AutoCopy => "autoCopy",
            RuleId::Source => "source",
            RuleId::Target => "target",
            RuleId::Locale => "locale",
            RuleId::PassThrough(key) => key,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_keys() {
        assert_eq!(RuleId::from_key("isListen"), RuleId::Listen);
        assert_eq!(RuleId::from_key("isDete"), RuleId::DeleteOnTranslate);
        assert_eq!(RuleId::from_key("autoCopy"), RuleId::AutoCopy);
        assert_eq!(RuleId::from_key("source"), RuleId::Source);
        assert_eq!(RuleId::from_key("target"), RuleId::Target);
        assert_eq!(RuleId::from_key("locale"), RuleId::Locale);
    }

    #[test]
    fn resolves_snake_case_aliases() {
        assert_eq!(RuleId::from_key("is_listen"), RuleId::Listen);
        assert_eq!(
            RuleId::from_key("delete_on_translate"),
            RuleId::DeleteOnTranslate
        );
        assert_eq!(RuleId::from_key("auto_copy"), RuleId::AutoCopy);
    }

    #[test]
    fn unknown_key_becomes_pass_through() {
        let rule = RuleId::from_key("frameMode");
        assert_eq!(rule, RuleId::PassThrough("frameMode".to_string()));
        assert_eq!(rule.key(), "frameMode");
    }
}
