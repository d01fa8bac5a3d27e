//! Mock implementations of the dispatch ports for testing.
//!
//! Generated with `mockall` so use-case tests can set expectations on the
//! collaborators without real infrastructure.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::ports::{
    RuleStoreError, RuleStorePort, SystemClipboardPort, TranslationError, TranslationPort,
    WatcherControlError, WatcherControlPort,
};
use crate::rules::{RuleId, Rules};
use crate::translation::LanguagePair;

mock! {
    pub Translator {}

    #[async_trait]
    impl TranslationPort for Translator {
        async fn translate(
            &self,
            text: &str,
            languages: &LanguagePair,
        ) -> Result<String, TranslationError>;
    }
}

mock! {
    pub RuleStore {}

    #[async_trait]
    impl RuleStorePort for RuleStore {
        fn snapshot(&self) -> Rules;
        fn get(&self, rule: &RuleId) -> Option<Value>;
        fn language_pair(&self) -> LanguagePair;
        fn set_by_key(&self, key: &str, value: Value) -> Result<RuleId, RuleStoreError>;
        async fn persist(&self) -> Result<(), RuleStoreError>;
    }
}

mock! {
    pub WatcherControl {}

    #[async_trait]
    impl WatcherControlPort for WatcherControl {
        async fn start_watcher(&self) -> Result<(), WatcherControlError>;
        async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
    }
}

mock! {
    pub Clipboard {}

    impl SystemClipboardPort for Clipboard {
        fn read_text(&self) -> anyhow::Result<Option<String>>;
        fn write_text(&self, text: &str) -> anyhow::Result<()>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_translator_returns_configured_result() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|text, pair| text == "Hello" && pair.target == "fr")
            .times(1)
            .returning(|_, _| Ok("Bonjour".to_string()));

        let out = translator
            .translate("Hello", &LanguagePair::new("en", "fr"))
            .await
            .unwrap();

        assert_eq!(out, "Bonjour");
    }
}
