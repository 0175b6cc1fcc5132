use crate::ProviderError;
use async_trait::async_trait;

/// Turns a natural-language description into raw (unrepaired) shader text.
#[async_trait]
pub trait ShaderCompletion: Send + Sync {
    async fn complete(&self, description: &str) -> Result<String, ProviderError>;
}
