// Inference provider trait, the swap point for the text-generating backend.
//
// A provider takes a prompt plus a media payload and returns free-form
// text. Transport errors, provider errors, and empty responses are all the
// same thing to callers: the variant failed.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for the opaque text-generating inference capability.
/// Implementations must be async because real providers are HTTP APIs.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Generate a free-text response for one prompt over one media payload.
    async fn generate(&self, prompt: &str, media: &[u8], mime_type: &str) -> Result<String>;
}

/// No-op provider used where a provider handle is structurally required but
/// must never be called. Bails if actually invoked.
pub struct NoopProvider;

#[async_trait]
impl InferenceProvider for NoopProvider {
    async fn generate(&self, _prompt: &str, _media: &[u8], _mime_type: &str) -> Result<String> {
        anyhow::bail!("NoopProvider should never be called; configure a real provider")
    }
}
