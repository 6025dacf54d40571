use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::translate::TranslateError;

/// Errors returned by the JSON API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("currently only en -> hi is supported")]
    UnsupportedLanguagePair {
        source_lang: String,
        target_lang: String,
    },

    #[error("translation failed")]
    TranslationFailure(#[source] TranslateError),

    #[error("not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::UnsupportedLanguagePair { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TranslationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::TranslationFailure(source) => json!({
                "error": self.to_string(),
                "details": source.to_string(),
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (self.status(), Json(body)).into_response()
    }
}
