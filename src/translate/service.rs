use std::sync::Arc;
use tracing::{debug, warn};

use super::error::{Result, TranslateError};
use super::interface::TranslateInterface;

/// Ordered chain of translators. The first success wins; if every translator
/// fails, the last error is returned.
#[derive(Clone)]
pub struct TranslationService {
    translators: Vec<Arc<dyn TranslateInterface>>,
}

impl TranslationService {
    pub fn new(translators: Vec<Arc<dyn TranslateInterface>>) -> Self {
        Self { translators }
    }

    pub fn translator_names(&self) -> Vec<&str> {
        self.translators.iter().map(|t| t.name()).collect()
    }

    pub async fn translate(&self, text: &str) -> Result<String> {
        let mut last_error = TranslateError::NoProviders;

        for translator in &self.translators {
            match translator.translate(text).await {
                Ok(translated) => {
                    debug!("Translated with {}", translator.name());
                    return Ok(translated);
                }
                Err(e) => {
                    warn!("Translator {} failed: {}", translator.name(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        name: &'static str,
        result: std::result::Result<&'static str, &'static str>,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn ok(name: &'static str, text: &'static str) -> Arc<Self> {
            Arc::new(Self { name, result: Ok(text), calls: AtomicUsize::new(0) })
        }

        fn failing(name: &'static str, message: &'static str) -> Arc<Self> {
            Arc::new(Self { name, result: Err(message), calls: AtomicUsize::new(0) })
        }
    }

    #[async_trait]
    impl TranslateInterface for Fixed {
        async fn translate(&self, _text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .map(str::to_string)
                .map_err(|m| TranslateError::Inference(m.to_string()))
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let primary = Fixed::ok("local", "नमस्ते");
        let fallback = Fixed::ok("google", "unused");
        let service = TranslationService::new(vec![primary.clone(), fallback.clone()]);

        assert_eq!(service.translate("hello").await.unwrap(), "नमस्ते");
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_back_when_primary_fails() {
        let primary = Fixed::failing("local", "no model");
        let fallback = Fixed::ok("google", "नमस्ते");
        let service = TranslationService::new(vec![primary.clone(), fallback.clone()]);

        assert_eq!(service.translate("hello").await.unwrap(), "नमस्ते");
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn last_failure_propagates() {
        let service = TranslationService::new(vec![
            Fixed::failing("local", "no model"),
            Fixed::failing("google", "network down"),
        ]);

        let err = service.translate("hello").await.unwrap_err();
        assert!(err.to_string().contains("network down"));
    }

    #[tokio::test]
    async fn empty_chain_fails() {
        let service = TranslationService::new(Vec::new());
        let err = service.translate("hello").await.unwrap_err();
        assert!(matches!(err, TranslateError::NoProviders));
    }
}
