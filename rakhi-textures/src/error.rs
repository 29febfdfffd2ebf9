//! Error types for texture providers.

use thiserror::Error;

/// Result type for texture provider operations.
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors that can occur while acquiring a texture image.
///
/// Hosts fold these into the editor's error slot; nothing here is fatal and
/// there is no retry policy, the user simply triggers the action again.
#[derive(Debug, Error)]
pub enum TextureError {
    /// `GEMINI_API_KEY` is not set in the environment.
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    /// The generation endpoint URL from configuration is invalid.
    #[error("invalid generation endpoint URL: {0}")]
    InvalidUrl(String),
    /// HTTP layer failed (connection, timeout, etc.).
    #[error("image generation HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Reading a local image file failed.
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    /// The payload is not a supported image.
    #[error("unsupported or corrupt image data: {0}")]
    Decode(String),
    /// The generation service answered without an image.
    #[error("AI failed to generate an image. The response was empty.")]
    EmptyResponse,
    /// The generation service rejected the request.
    #[error("image generation failed with status {code}: {message}")]
    Api {
        /// HTTP status code returned by the service.
        code: u16,
        /// Response body, typically a JSON error description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_message_is_user_facing() {
        assert_eq!(
            TextureError::EmptyResponse.to_string(),
            "AI failed to generate an image. The response was empty."
        );
    }

    #[test]
    fn test_api_error_carries_status_and_body() {
        let err = TextureError::Api {
            code: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "image generation failed with status 429: quota exceeded"
        );
    }
}
