use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::Result;

pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "hi";

/// Translate request as accepted by `POST /api/translate`, after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslateRequest {
    /// Build a request from an arbitrary JSON payload.
    ///
    /// Missing, null, or non-string fields are treated as absent. The text is
    /// trimmed; language codes fall back to `en`/`hi` when absent or empty
    /// and are lowercased.
    pub fn from_payload(payload: &Value) -> Self {
        let field = |name: &str| payload.get(name).and_then(|v| v.as_str());

        let text = field("text").unwrap_or("").trim().to_string();
        let source_lang = field("source_lang")
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SOURCE_LANG)
            .to_lowercase();
        let target_lang = field("target_lang")
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TARGET_LANG)
            .to_lowercase();

        Self {
            text,
            source_lang,
            target_lang,
        }
    }

    /// Parse a raw request body; anything that is not valid JSON counts as `{}`
    pub fn from_body(body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
        Self::from_payload(&payload)
    }
}

/// Successful translation. The text is repeated under two keys for older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslateResponse {
    pub fn new(translated: String, source_lang: String, target_lang: String) -> Self {
        Self {
            translation: translated.clone(),
            translated_text: translated,
            source_lang,
            target_lang,
        }
    }
}

/// A single translation capability (local model, remote API, ...)
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` and return the translated string
    async fn translate(&self, text: &str) -> Result<String>;

    /// Name used in logs
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_and_lowercases_languages() {
        let request = TranslateRequest::from_payload(&json!({"text": "  Hello  "}));
        assert_eq!(request.text, "Hello");
        assert_eq!(request.source_lang, "en");
        assert_eq!(request.target_lang, "hi");

        let request = TranslateRequest::from_payload(&json!({
            "text": "Hello",
            "source_lang": "EN",
            "target_lang": "Hi"
        }));
        assert_eq!(request.source_lang, "en");
        assert_eq!(request.target_lang, "hi");
    }

    #[test]
    fn empty_or_null_languages_use_defaults() {
        let request = TranslateRequest::from_payload(&json!({
            "text": "Hello",
            "source_lang": "",
            "target_lang": null
        }));
        assert_eq!(request.source_lang, "en");
        assert_eq!(request.target_lang, "hi");
    }

    #[test]
    fn non_string_text_is_treated_as_missing() {
        let request = TranslateRequest::from_payload(&json!({"text": 42}));
        assert_eq!(request.text, "");
    }

    #[test]
    fn malformed_body_is_treated_as_empty_object() {
        let request = TranslateRequest::from_body(b"not json");
        assert_eq!(request.text, "");
        assert_eq!(request.source_lang, "en");

        let request = TranslateRequest::from_body(b"[1, 2, 3]");
        assert_eq!(request.text, "");
    }

    #[test]
    fn response_duplicates_translation() {
        let response = TranslateResponse::new("नमस्ते".into(), "en".into(), "hi".into());
        assert_eq!(response.translation, response.translated_text);
    }
}
