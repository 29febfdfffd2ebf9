//! Local filesystem texture source.

use std::path::Path;

use tracing::info;

use crate::error::TextureResult;
use crate::texture::TextureImage;

/// Read and validate an image file from disk.
///
/// # Errors
///
/// Returns [`TextureError::Io`](crate::TextureError::Io) when the file
/// cannot be read and [`TextureError::Decode`](crate::TextureError::Decode)
/// when its contents are not a supported image.
pub async fn read_local_image(path: impl AsRef<Path>) -> TextureResult<TextureImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let texture = TextureImage::from_bytes(bytes)?;
    let (width, height) = texture.dimensions();
    info!(path = %path.display(), width, height, "loaded local texture");
    Ok(texture)
}
