use thiserror::Error;

/// Failures while asking the upstream provider for a shader.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Upstream answered with something other than 200 OK
    #[error("HTTP {0}")]
    Status(u16),

    /// 200 OK, but the body is not the expected `generateContent` shape
    #[error("Unexpected upstream response: {0}")]
    Contract(String),

    /// Connection, TLS or timeout failure
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProviderError {
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }
}

/// Invalid or missing provider settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set; export it with the provider API key")]
    MissingApiKey(&'static str),

    #[error("Invalid upstream URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Upstream timeout must be greater than zero")]
    ZeroTimeout,
}
