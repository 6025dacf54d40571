use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("local model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response from {provider}: {message}")]
    InvalidResponse { provider: String, message: String },

    #[error("{0} returned an empty translation")]
    EmptyOutput(String),

    #[error("no translators configured")]
    NoProviders,
}

pub type Result<T> = std::result::Result<T, TranslateError>;
