//! Upstream completion capability for shaderforge.
//!
//! The HTTP layer only sees [`ShaderCompletion`]; [`GeminiClient`] is the
//! production implementation talking to a `generateContent` endpoint.

mod completion;
mod config;
mod error;
mod gemini;
pub mod prompt;

pub use completion::ShaderCompletion;
pub use config::{
    ProviderConfig, ProviderOverrides, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_TIMEOUT, MODEL_ENV, UPSTREAM_URL_ENV,
};
pub use error::{ConfigError, ProviderError};
pub use gemini::GeminiClient;
