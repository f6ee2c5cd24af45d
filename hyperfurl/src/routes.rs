//! HTTP routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use hyperfurl_core::{unfurl, UnfurlResult};

use crate::ports::{ImageGenPort, SpeechPort};

pub const DEFAULT_IMAGE_MODEL: &str = "black-forest-labs/FLUX-1-dev";
pub const DEFAULT_VOICE: &str = "af_nicole";

/// Shared handler state: the provider ports.
pub struct AppState {
    pub image_gen: Arc<dyn ImageGenPort>,
    pub speech: Arc<dyn SpeechPort>,
}

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate))
        .route("/api/models", get(list_models))
        .route("/api/voices", get(list_voices))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub seed: String,
    pub style_hint: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub image: String,
    pub speech: Option<deepinfra::Speech>,
    pub seed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_hint: Option<String>,
    pub unfurl_result: UnfurlResult,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Serialize)]
pub struct ResponseMetadata {
    pub model: String,
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Seed prompt is required")]
    MissingSeed,
    #[error("Failed to generate image")]
    ImageGeneration(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingSeed => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Seed prompt is required" }),
            ),
            ApiError::ImageGeneration(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to generate image", "details": details }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Expand a seed into a prompt, render it, and optionally narrate it.
///
/// Image generation failure fails the request; speech failure degrades to
/// a null `speech` field.
async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if req.seed.trim().is_empty() {
        return Err(ApiError::MissingSeed);
    }

    let model = req.model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL);
    let voice = req.voice.as_deref().unwrap_or(DEFAULT_VOICE);

    let unfurl_result = unfurl(&req.seed, req.style_hint.as_deref());
    tracing::info!(seed = %req.seed, model, "unfurled seed into prompt");

    let image = state
        .image_gen
        .generate_image(&unfurl_result.final_prompt, model)
        .await
        .map_err(|e| ApiError::ImageGeneration(e.to_string()))?;

    let speech = match state
        .speech
        .generate_speech(&unfurl_result.final_prompt, voice)
        .await
    {
        Ok(speech) => speech,
        Err(e) => {
            tracing::warn!(error = %e, "speech generation failed, continuing without speech");
            None
        }
    };

    Ok(Json(GenerateResponse {
        success: true,
        image,
        speech,
        seed: req.seed,
        style_hint: req.style_hint,
        unfurl_result,
        metadata: ResponseMetadata {
            model: model.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        },
    }))
}

async fn list_models() -> Json<Vec<deepinfra::CatalogEntry>> {
    Json(deepinfra::available_image_models())
}

async fn list_voices() -> Json<Vec<deepinfra::CatalogEntry>> {
    Json(deepinfra::available_voices())
}
