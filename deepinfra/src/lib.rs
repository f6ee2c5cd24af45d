//! Minimal DeepInfra API client.
//!
//! This crate provides a focused client for the three DeepInfra surfaces
//! HyperFurl uses:
//! - Text-to-image inference (FLUX family)
//! - OpenAI-compatible chat completions (prompt summarization)
//! - OpenAI-compatible speech synthesis (Kokoro voices)

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

const API_BASE: &str = "https://api.deepinfra.com/v1";

const EXPANSION_MODEL: &str = "deepseek-ai/DeepSeek-V3.2-Exp";
const SPEECH_MODEL: &str = "hexgrad/Kokoro-82M";

const EXPANSION_SYSTEM_PROMPT: &str = "You are a concise image describer. Transform image \
     prompts into simple, clear descriptions in 1-2 sentences. Focus on the main subject and \
     key visual elements only. Avoid sound effects, scene details, or cinematic language. \
     Keep it brief and factual.";

/// Errors that can occur when using the DeepInfra client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not configured")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A narrated version of a prompt: mp3 audio plus the text that was read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speech {
    /// Playable `data:audio/mp3;base64,` URL.
    pub audio_url: String,
    pub expanded_text: String,
    pub original_text: String,
    pub voice: String,
}

/// A selectable model or voice, as shown to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

/// DeepInfra API client.
#[derive(Clone)]
pub struct DeepInfra {
    client: reqwest::Client,
    api_key: String,
}

impl DeepInfra {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .connect_timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
        }
    }

    /// Create a client from the DEEPINFRA_API_KEY environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("DEEPINFRA_API_KEY").map_err(|_| Error::NoApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Generate an image from a prompt; returns the first image URL.
    pub async fn generate_image(&self, prompt: &str, model: &str) -> Result<String, Error> {
        let body = json!({
            "prompt": prompt,
            "width": 1024,
            "height": 576,
            "num_inference_steps": 20,
            "guidance_scale": 7.5,
        });

        let response = self
            .client
            .post(format!("{API_BASE}/inference/{model}"))
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        let inference: InferenceResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        inference
            .images
            .into_iter()
            .next()
            .ok_or_else(|| Error::Parse("response contained no images".to_string()))
    }

    /// Rewrite an image prompt into a short spoken-friendly description.
    pub async fn expand_text(&self, text: &str) -> Result<String, Error> {
        let body = json!({
            "model": EXPANSION_MODEL,
            "messages": [
                { "role": "system", "content": EXPANSION_SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": format!("Describe this image prompt in 1-2 simple sentences: \"{text}\""),
                }
            ],
            "max_tokens": 100,
            "temperature": 0.3,
        });

        let response = self
            .client
            .post(format!("{API_BASE}/openai/chat/completions"))
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Parse("completion contained no choices".to_string()))
    }

    /// Narrate a prompt: expand it to plain prose, then synthesize mp3 audio.
    ///
    /// A non-success status from the speech endpoint yields `Ok(None)` so
    /// callers can degrade gracefully; transport and expansion failures are
    /// still surfaced as errors.
    pub async fn generate_speech(&self, text: &str, voice: &str) -> Result<Option<Speech>, Error> {
        let expanded_text = self.expand_text(text).await?;

        let body = json!({
            "model": SPEECH_MODEL,
            "voice": voice,
            "input": expanded_text,
            "response_format": "mp3",
            "speed": 1.0,
        });

        let response = self
            .client
            .post(format!("{API_BASE}/openai/audio/speech"))
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Some(Speech {
            audio_url: format!("data:audio/mp3;base64,{}", BASE64.encode(&audio)),
            expanded_text,
            original_text: text.to_string(),
            voice: voice.to_string(),
        }))
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = format!("Bearer {}", self.api_key);
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&bearer)
                .map_err(|e| Error::Config(format!("Invalid API key: {e}")))?,
        );
        Ok(headers)
    }
}

/// Image models the UI can select from.
pub fn available_image_models() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: "black-forest-labs/FLUX-1-schnell",
            name: "FLUX 1 Schnell (Fast)",
        },
        CatalogEntry {
            id: "black-forest-labs/FLUX-1-dev",
            name: "FLUX 1 Dev (Balanced)",
        },
        CatalogEntry {
            id: "black-forest-labs/FLUX-1.1-pro",
            name: "FLUX 1.1 Pro (Quality)",
        },
    ]
}

/// Kokoro voices the UI can select from.
pub fn available_voices() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: "af_nicole",
            name: "NICOLE (Soft spoken voice)",
        },
        CatalogEntry {
            id: "ai_nova",
            name: "NOVA (Natural AI Voice)",
        },
        CatalogEntry {
            id: "af_bella",
            name: "BELLA (Warm, friendly female voice)",
        },
        CatalogEntry {
            id: "af_sarah",
            name: "SARAH (Clear, professional female voice)",
        },
        CatalogEntry {
            id: "af_emma",
            name: "EMMA (Energetic, youthful female voice)",
        },
        CatalogEntry {
            id: "af_zoe",
            name: "ZOE (Smooth, sophisticated female voice)",
        },
        CatalogEntry {
            id: "af_grace",
            name: "GRACE (Elegant, refined female voice)",
        },
        CatalogEntry {
            id: "af_rose",
            name: "ROSE (Gentle, caring female voice)",
        },
    ]
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Deserialize)]
struct InferenceResponse {
    images: Vec<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_key() {
        std::env::remove_var("DEEPINFRA_API_KEY");
        assert!(matches!(DeepInfra::from_env(), Err(Error::NoApiKey)));
    }

    #[test]
    fn catalogs_are_nonempty_and_default_entries_present() {
        let models = available_image_models();
        assert_eq!(models.len(), 3);
        assert!(models.iter().any(|m| m.id == "black-forest-labs/FLUX-1-dev"));

        let voices = available_voices();
        assert_eq!(voices.len(), 8);
        assert!(voices.iter().any(|v| v.id == "af_nicole"));
        assert!(voices.iter().any(|v| v.id == "af_rose"));
    }

    #[test]
    fn headers_reject_invalid_key() {
        let client = DeepInfra::new("bad\nkey");
        assert!(matches!(client.build_headers(), Err(Error::Config(_))));
    }

    #[test]
    fn speech_serializes_with_audio_url() {
        let speech = Speech {
            audio_url: "data:audio/mp3;base64,AAAA".to_string(),
            expanded_text: "a cat on a roof".to_string(),
            original_text: "a cat".to_string(),
            voice: "af_nicole".to_string(),
        };
        let json = serde_json::to_value(&speech).unwrap();
        assert_eq!(json["audio_url"], "data:audio/mp3;base64,AAAA");
        assert_eq!(json["voice"], "af_nicole");
    }
}
