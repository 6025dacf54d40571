use std::sync::Arc;

use crate::config::Config;
use crate::translate::{TranslationService, TranslatorFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translation: Arc<TranslationService>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translation = TranslatorFactory::create_service(&config)?;
        Ok(Self::with_service(config, translation))
    }

    pub fn with_service(config: Config, translation: TranslationService) -> Self {
        Self {
            config: Arc::new(config),
            translation: Arc::new(translation),
        }
    }
}
