//! English → Hindi translation gateway.
//!
//! A small axum service that translates text with a local model, falling back
//! to a remote translation API, and serves a bundled single-page frontend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
