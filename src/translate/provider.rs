use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::error::{Result, TranslateError};
use super::interface::TranslateInterface;

/// A loaded local translation model
///
/// Implementations are blocking and are always called from the blocking pool.
pub trait ModelBackend: Send + Sync {
    /// Translate a single input, returning the candidate translations in order
    fn translate(&self, text: &str) -> Result<Vec<String>>;
}

/// Builds a model backend from a model identifier and an output token cap
pub type ModelLoader = Arc<dyn Fn(&str, usize) -> Result<Arc<dyn ModelBackend>> + Send + Sync>;

/// Process-wide owner of the local model handle.
///
/// The handle is built on the first call to [`TranslatorProvider::get_translator`]
/// and reused afterwards. Concurrent first calls wait on a single construction.
/// A failed construction is not remembered, so the next call tries again.
pub struct TranslatorProvider {
    model_name: String,
    max_output_tokens: usize,
    loader: ModelLoader,
    handle: OnceCell<Arc<dyn ModelBackend>>,
}

impl TranslatorProvider {
    pub fn new(model_name: String, max_output_tokens: usize, loader: ModelLoader) -> Self {
        Self {
            model_name,
            max_output_tokens,
            loader,
            handle: OnceCell::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.initialized()
    }

    pub async fn get_translator(&self) -> Result<Arc<dyn ModelBackend>> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                info!("Loading local translation model: {}", self.model_name);
                let loader = self.loader.clone();
                let model_name = self.model_name.clone();
                let max_output_tokens = self.max_output_tokens;

                let backend = tokio::task::spawn_blocking(move || {
                    (*loader)(&model_name, max_output_tokens)
                })
                .await
                .map_err(|e| TranslateError::ModelUnavailable(format!("model loader aborted: {}", e)))??;

                info!("Local translation model ready: {}", self.model_name);
                Ok::<_, TranslateError>(backend)
            })
            .await?;

        Ok(handle.clone())
    }
}

/// Primary translator: runs the cached local model
pub struct LocalTranslator {
    provider: Arc<TranslatorProvider>,
    name: String,
}

impl LocalTranslator {
    pub fn new(provider: Arc<TranslatorProvider>) -> Self {
        let name = format!("local:{}", provider.model_name());
        Self { provider, name }
    }
}

#[async_trait]
impl TranslateInterface for LocalTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        if !self.provider.is_loaded() {
            debug!("{} not loaded yet, loading on demand", self.name);
        }
        let backend = self.provider.get_translator().await?;
        let input = text.to_string();

        let outputs = tokio::task::spawn_blocking(move || backend.translate(&input))
            .await
            .map_err(|e| TranslateError::Inference(format!("inference task aborted: {}", e)))??;

        let translated = outputs
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::EmptyOutput(self.name.clone()))?;

        debug!("{} produced {} chars", self.name, translated.chars().count());
        Ok(translated)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Loader used in production builds.
///
/// Without the `local-model` feature there is no in-process runtime, so this
/// always fails and requests go to the fallback translator.
pub fn load_local_model(model_name: &str, max_output_tokens: usize) -> Result<Arc<dyn ModelBackend>> {
    #[cfg(feature = "local-model")]
    {
        let backend = super::marian::MarianBackend::load(model_name, max_output_tokens)?;
        Ok(Arc::new(backend))
    }

    #[cfg(not(feature = "local-model"))]
    {
        let _ = max_output_tokens;
        Err(TranslateError::ModelUnavailable(format!(
            "cannot load {}: built without the `local-model` feature",
            model_name
        )))
    }
}
