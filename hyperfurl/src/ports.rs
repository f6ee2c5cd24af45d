//! Port traits for the generation providers.
//!
//! The HTTP handlers talk to image generation and speech synthesis through
//! these traits so tests can swap in mocks. The DeepInfra client is the
//! production implementation of both.

use async_trait::async_trait;
use deepinfra::{DeepInfra, Speech};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Failed(String),
}

impl From<deepinfra::Error> for ProviderError {
    fn from(err: deepinfra::Error) -> Self {
        ProviderError::Failed(err.to_string())
    }
}

#[async_trait]
pub trait ImageGenPort: Send + Sync {
    async fn generate_image(&self, prompt: &str, model: &str) -> Result<String, ProviderError>;
}

#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// `Ok(None)` means the provider declined; callers treat it as absent
    /// narration rather than a failure.
    async fn generate_speech(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<Option<Speech>, ProviderError>;
}

#[async_trait]
impl ImageGenPort for DeepInfra {
    async fn generate_image(&self, prompt: &str, model: &str) -> Result<String, ProviderError> {
        Ok(DeepInfra::generate_image(self, prompt, model).await?)
    }
}

#[async_trait]
impl SpeechPort for DeepInfra {
    async fn generate_speech(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<Option<Speech>, ProviderError> {
        Ok(DeepInfra::generate_speech(self, text, voice).await?)
    }
}
