use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tracing::info;

use crate::config::Config;
use super::google::GoogleTranslator;
use super::interface::TranslateInterface;
use super::provider::{load_local_model, LocalTranslator, ModelLoader, TranslatorProvider};
use super::service::TranslationService;

/// Language pair used by the remote fallback, regardless of the request
pub const FALLBACK_SOURCE_LANG: &str = "en";
pub const FALLBACK_TARGET_LANG: &str = "hi";

/// Factory for the translator chain
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Build the `[local model, remote fallback]` chain from configuration
    pub fn create_service(config: &Config) -> Result<TranslationService> {
        Self::create_service_with_loader(config, Arc::new(load_local_model))
    }

    /// Same as [`TranslatorFactory::create_service`] with a custom model loader
    pub fn create_service_with_loader(
        config: &Config,
        loader: ModelLoader,
    ) -> Result<TranslationService> {
        info!(
            "Initializing translators: model={}, fallback={}",
            config.model_name, config.fallback_url
        );

        let provider = Arc::new(TranslatorProvider::new(
            config.model_name.clone(),
            config.max_output_tokens,
            loader,
        ));

        let fallback = GoogleTranslator::new(
            config.fallback_url.clone(),
            FALLBACK_SOURCE_LANG,
            FALLBACK_TARGET_LANG,
            Duration::from_secs(config.fallback_timeout_secs),
        )?;

        let translators: Vec<Arc<dyn TranslateInterface>> = vec![
            Arc::new(LocalTranslator::new(provider)),
            Arc::new(fallback),
        ];

        let service = TranslationService::new(translators);
        info!("Translator chain: {}", service.translator_names().join(" -> "));

        Ok(service)
    }
}
