use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::{Result, TranslateError};
use super::interface::TranslateInterface;

/// Remote fallback using the public Google Translate web endpoint
///
/// The language pair is fixed at construction; the text passed to
/// [`TranslateInterface::translate`] is always sent with that pair.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
    source_lang: String,
    target_lang: String,
}

impl GoogleTranslator {
    pub fn new(
        base_url: String,
        source_lang: &str,
        target_lang: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            client,
            base_url,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        })
    }

    /// Join the translated segments found at `[0][*][0]`
    fn parse_segments(body: &Value) -> Result<String> {
        let segments = body.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
            TranslateError::InvalidResponse {
                provider: "google".to_string(),
                message: "missing segment array".to_string(),
            }
        })?;

        let translation: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
            .collect();

        if translation.is_empty() {
            return Err(TranslateError::EmptyOutput("google".to_string()));
        }

        Ok(translation)
    }
}

#[async_trait]
impl TranslateInterface for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        debug!(
            "Requesting fallback translation {} -> {} ({} chars)",
            self.source_lang,
            self.target_lang,
            text.chars().count()
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Google Translate returned {}: {}", status, body);
            return Err(TranslateError::InvalidResponse {
                provider: "google".to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body: Value = response.json().await?;
        Self::parse_segments(&body)
    }

    fn name(&self) -> &str {
        "google"
    }
}
