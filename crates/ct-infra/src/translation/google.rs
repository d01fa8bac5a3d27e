use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ct_core::ports::{TranslationError, TranslationPort};
use ct_core::LanguagePair;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info_span, Instrument};

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the public `gtx` web endpoint of Google Translate.
pub struct GoogleTranslateClient {
    http: Client,
    endpoint: String,
}

impl GoogleTranslateClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("build translation http client failed")?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/translate_a/single", self.endpoint)
    }
}

/// Concatenate the translated segments of a `dt=t` response.
///
/// The body looks like `[[["Bonjour","Hello",null,null,1]],null,"en",...]`;
/// only `[0][i][0]` matters.
fn join_segments(body: &Value) -> Result<String, TranslationError> {
    let segments = match body.get(0) {
        Some(Value::Array(segments)) => segments,
        Some(Value::Null) | None => return Ok(String::new()),
        Some(other) => {
            return Err(TranslationError::Malformed(format!(
                "expected segment list, got {other}"
            )))
        }
    };

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

#[async_trait]
impl TranslationPort for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<String, TranslationError> {
        let span = info_span!(
            "infra.google_translate",
            sl = %languages.source,
            tl = %languages.target,
        );

        async {
            let response = self
                .http
                .get(self.url())
                .query(&[
                    ("client", "gtx"),
                    ("sl", languages.source.as_str()),
                    ("tl", languages.target.as_str()),
                    ("dt", "t"),
                    ("q", text),
                ])
                .send()
                .await
                .map_err(|e| TranslationError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TranslationError::Status {
                    status: status.as_u16(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(|e| TranslationError::Transport(e.to_string()))?;
            if body.trim().is_empty() {
                debug!("Empty provider body");
                return Ok(String::new());
            }

            let json: Value = serde_json::from_str(&body)
                .map_err(|e| TranslationError::Malformed(e.to_string()))?;
            join_segments(&json)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn segments_are_concatenated_in_order() {
        let body = json!([
            [
                ["Bonjour. ", "Hello. ", null, null, 10],
                ["Au revoir.", "Goodbye.", null, null, 10]
            ],
            null,
            "en"
        ]);

        assert_eq!(join_segments(&body).unwrap(), "Bonjour. Au revoir.");
    }

    #[test]
    fn null_segment_list_is_empty_translation() {
        assert_eq!(join_segments(&json!([null, null, "en"])).unwrap(), "");
    }

    #[test]
    fn unexpected_shape_is_malformed() {
        assert!(matches!(
            join_segments(&json!(["oops"])),
            Err(TranslationError::Malformed(_))
        ));
    }
}
