use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse};

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.config.model_name,
        "max_input_chars": state.config.max_input_chars,
    }))
}

/// Check a normalized request against the input limits and the supported pair
pub fn validate_request(request: &TranslateRequest, max_input_chars: usize) -> Result<(), ApiError> {
    if request.text.is_empty() {
        return Err(ApiError::InvalidInput("text is required".to_string()));
    }

    if request.text.chars().count() > max_input_chars {
        return Err(ApiError::InvalidInput(format!(
            "text too long (max {})",
            max_input_chars
        )));
    }

    if request.source_lang != "en" || request.target_lang != "hi" {
        return Err(ApiError::UnsupportedLanguagePair {
            source_lang: request.source_lang.clone(),
            target_lang: request.target_lang.clone(),
        });
    }

    Ok(())
}

/// Whether the request declares a JSON body (`application/json` or `application/*+json`)
fn has_json_body(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Render an error with every source in its chain, outermost first
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub async fn translate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TranslateResponse>, ApiError> {
    // Bodies not declared as JSON are ignored, like an empty object
    let request = if has_json_body(&headers) {
        TranslateRequest::from_body(&body)
    } else {
        TranslateRequest::from_payload(&Value::Null)
    };
    validate_request(&request, state.config.max_input_chars)?;

    info!(
        "Translating {} chars {} -> {}",
        request.text.chars().count(),
        request.source_lang,
        request.target_lang
    );

    let translated = state
        .translation
        .translate(&request.text)
        .await
        .map_err(|e| {
            error!("translation_error: {}", error_chain(&e));
            ApiError::TranslationFailure(e)
        })?;

    Ok(Json(TranslateResponse::new(
        translated,
        request.source_lang,
        request.target_lang,
    )))
}

pub async fn api_not_found() -> ApiError {
    ApiError::NotFound
}

/// Serve a frontend asset, or the entry document for unknown paths.
/// Anything under `api/` that reached here matched no API route.
pub async fn static_proxy(State(state): State<AppState>, request: Request) -> Response {
    if request.uri().path().trim_start_matches('/').starts_with("api/") {
        return ApiError::NotFound.into_response();
    }

    let frontend_dir = &state.config.frontend_dir;
    let frontend = ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")));

    match frontend.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, source: &str, target: &str) -> TranslateRequest {
        TranslateRequest {
            text: text.to_string(),
            source_lang: source.to_string(),
            target_lang: target.to_string(),
        }
    }

    #[test]
    fn empty_text_is_rejected_first() {
        let err = validate_request(&request("", "fr", "de"), 10).unwrap_err();
        assert_eq!(err.to_string(), "text is required");
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Six code points, eighteen bytes.
        assert!(validate_request(&request("नमस्ते", "en", "hi"), 6).is_ok());
        let err = validate_request(&request("hello!!", "en", "hi"), 6).unwrap_err();
        assert_eq!(err.to_string(), "text too long (max 6)");
    }

    #[test]
    fn json_content_types_are_recognized() {
        let headers = |value: &str| {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, value.parse().unwrap());
            headers
        };

        assert!(has_json_body(&headers("application/json")));
        assert!(has_json_body(&headers("Application/JSON; charset=utf-8")));
        assert!(has_json_body(&headers("application/merge-patch+json")));
        assert!(!has_json_body(&headers("text/plain")));
        assert!(!has_json_body(&headers("application/x-www-form-urlencoded")));
        assert!(!has_json_body(&HeaderMap::new()));
    }

    #[test]
    fn error_chain_includes_sources() {
        let err = ApiError::TranslationFailure(crate::translate::TranslateError::NoProviders);
        assert_eq!(error_chain(&err), "translation failed: no translators configured");
    }

    #[test]
    fn only_en_to_hi_is_accepted() {
        assert!(validate_request(&request("hi", "en", "hi"), 10).is_ok());
        for (source, target) in [("hi", "en"), ("en", "fr"), ("de", "hi")] {
            let err = validate_request(&request("hello", source, target), 10).unwrap_err();
            assert_eq!(err.to_string(), "currently only en -> hi is supported");
        }
    }
}
