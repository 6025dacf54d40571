use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use anyhow::Result;

pub const DEFAULT_MODEL_NAME: &str = "Helsinki-NLP/opus-mt-en-hi";
pub const DEFAULT_FALLBACK_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: usize,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
    #[serde(default = "default_fallback_timeout_secs")]
    pub fallback_timeout_secs: u64,
}

fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_max_input_chars() -> usize {
    2000
}

fn default_max_output_tokens() -> usize {
    256
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}

fn default_fallback_url() -> String {
    DEFAULT_FALLBACK_URL.to_string()
}

fn default_fallback_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from an optional file and the process environment.
    ///
    /// Environment variables take precedence over the file, which takes
    /// precedence over the built-in defaults. Keys are matched
    /// case-insensitively, so `MODEL_NAME` sets `model_name`.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::build(config_path, None)
    }

    /// Same as [`Config::load`] but reads variables from `vars` instead of
    /// the process environment.
    #[cfg(test)]
    fn from_vars(vars: config::Map<String, String>) -> Result<Self> {
        Self::build(None, Some(vars))
    }

    fn build(config_path: Option<&str>, vars: Option<config::Map<String, String>>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let environment = config::Environment::default()
            .try_parsing(true)
            .source(vars);

        let config: Config = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.model_name.trim().is_empty() {
            anyhow::bail!("model_name cannot be empty");
        }
        if self.max_output_tokens == 0 {
            anyhow::bail!("max_output_tokens must be greater than zero");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            max_input_chars: default_max_input_chars(),
            max_output_tokens: default_max_output_tokens(),
            host: default_host(),
            port: default_port(),
            frontend_dir: default_frontend_dir(),
            fallback_url: default_fallback_url(),
            fallback_timeout_secs: default_fallback_timeout_secs(),
        }
    }
}
