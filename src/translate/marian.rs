//! In-process Marian translation model backed by `rust-bert`.
//!
//! Weights are pulled from the Hugging Face hub on first load and cached by
//! `rust-bert` under its usual cache directory. Only English → Hindi is wired.

use rust_bert::pipelines::common::{ModelResource, ModelType};
use rust_bert::pipelines::translation::{Language, TranslationConfig, TranslationModel};
use rust_bert::resources::RemoteResource;
use std::sync::Mutex;
use tch::Device;
use tracing::debug;

use super::error::{Result, TranslateError};
use super::provider::ModelBackend;

pub struct MarianBackend {
    model: Mutex<TranslationModel>,
}

fn hub_resource(model_name: &str, file: &str) -> RemoteResource {
    let url = format!("https://huggingface.co/{}/resolve/main/{}", model_name, file);
    RemoteResource::new(&url, model_name)
}

impl MarianBackend {
    pub fn load(model_name: &str, max_output_tokens: usize) -> Result<Self> {
        debug!("Fetching Marian resources for {}", model_name);

        let mut config = TranslationConfig::new(
            ModelType::Marian,
            ModelResource::Torch(Box::new(hub_resource(model_name, "rust_model.ot"))),
            hub_resource(model_name, "config.json"),
            hub_resource(model_name, "vocab.json"),
            Some(hub_resource(model_name, "source.spm")),
            [Language::English],
            [Language::Hindi],
            Device::cuda_if_available(),
        );
        config.max_length = Some(max_output_tokens as i64);

        let model = TranslationModel::new(config)
            .map_err(|e| TranslateError::ModelUnavailable(format!("{}: {}", model_name, e)))?;

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl ModelBackend for MarianBackend {
    fn translate(&self, text: &str) -> Result<Vec<String>> {
        let model = self
            .model
            .lock()
            .map_err(|_| TranslateError::Inference("model lock poisoned".to_string()))?;

        model
            .translate(&[text], Language::English, Language::Hindi)
            .map_err(|e| TranslateError::Inference(e.to_string()))
    }
}
