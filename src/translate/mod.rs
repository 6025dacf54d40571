pub mod interface;
pub mod error;
pub mod provider;
pub mod google;
pub mod service;
pub mod factory;
#[cfg(feature = "local-model")]
pub mod marian;

pub use interface::{TranslateInterface, TranslateRequest, TranslateResponse};
pub use error::TranslateError;
pub use provider::{LocalTranslator, ModelBackend, ModelLoader, TranslatorProvider};
pub use google::GoogleTranslator;
pub use service::TranslationService;
pub use factory::TranslatorFactory;
