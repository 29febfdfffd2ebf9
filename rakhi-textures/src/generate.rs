//! Remote texture generation client.
//!
//! Talks to an Imagen-style `:predict` endpoint and validates the returned
//! payload into a [`TextureImage`]. One request produces one square PNG
//! sticker. There is no retry; callers re-trigger manually.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::{TextureError, TextureResult};
use crate::texture::TextureImage;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "RAKHI_GEMINI_BASE_URL";
/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "RAKHI_GEMINI_MODEL";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "imagen-3.0-generate-002";

/// Configuration for the image generation service.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Service base URL; the model path is derived from it.
    pub base_url: String,
    /// Model identifier used in the request path.
    pub model: String,
}

impl GeneratorConfig {
    /// Configuration for the hosted endpoint and default model.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Read configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` is required. `RAKHI_GEMINI_BASE_URL` and
    /// `RAKHI_GEMINI_MODEL` override the defaults when set.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::MissingApiKey`] when `GEMINI_API_KEY` is
    /// unset.
    pub fn from_env() -> TextureResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| TextureError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.model = model;
        }
        Ok(config)
    }
}

/// Asynchronous client for the image generation service.
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl ImageGenerator {
    /// Build a generator from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::InvalidUrl`] if the base URL is malformed and
    /// [`TextureError::Http`] if the HTTP client fails to build.
    pub fn new(config: GeneratorConfig) -> TextureResult<Self> {
        let mut endpoint =
            Url::parse(&config.base_url).map_err(|e| TextureError::InvalidUrl(e.to_string()))?;
        endpoint.set_path(&format!("/v1beta/models/{}:predict", config.model));

        let http = Client::builder()
            .user_agent(concat!("rakhi-textures/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key,
        })
    }

    /// Request one sticker-style image of `subject`.
    ///
    /// The prompt asks for a cartoon character on a transparent background,
    /// sized square so it tiles cleanly over an element's bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::Http`] on transport failure,
    /// [`TextureError::Api`] when the service answers with an error status,
    /// [`TextureError::EmptyResponse`] when no image comes back, and
    /// [`TextureError::Decode`] when the payload is not a usable image.
    pub async fn generate(&self, subject: &str) -> TextureResult<TextureImage> {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: sticker_prompt(subject),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: "1:1",
                output_mime_type: "image/png",
            },
        };

        info!(subject, endpoint = %self.endpoint, "requesting generated texture");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(code = status.as_u16(), "generation service rejected the request");
            return Err(TextureError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let payload: PredictResponse = response.json().await?;
        let Some(prediction) = payload.predictions.into_iter().next() else {
            return Err(TextureError::EmptyResponse);
        };
        if prediction.bytes_base64_encoded.is_empty() {
            return Err(TextureError::EmptyResponse);
        }

        let bytes = STANDARD
            .decode(&prediction.bytes_base64_encoded)
            .map_err(|e| TextureError::Decode(format!("failed to decode base64: {e}")))?;

        TextureImage::from_bytes(bytes)
    }
}

/// Prompt template for sticker-style subjects.
fn sticker_prompt(subject: &str) -> String {
    format!(
        "A cute, happy, cartoon-style {subject}, drawn in a style similar to Disney or Pixar \
         animation. The character should be the only subject. IMPORTANT: The background must \
         be fully transparent. The character should be joyful and centered, suitable for a \
         celebration."
    )
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    output_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: String,
}
