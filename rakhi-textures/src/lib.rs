//! # Rakhi Textures
//!
//! Texture providers for Rakhi Studio. Patterns enter a design from two
//! sources:
//!
//! - [`read_local_image`] reads an image file from disk.
//! - [`ImageGenerator`] asks a remote service for a sticker-style image of
//!   a named subject.
//!
//! Both validate their payload into a [`TextureImage`]; its
//! [`to_data_uri`](TextureImage::to_data_uri) output is what
//! `Editor::apply_texture` stores on the design. The editor itself stays
//! synchronous; these calls run on the host's runtime and hand their result
//! back through a single commit.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod generate;
pub mod local;
pub mod texture;

pub use error::{TextureError, TextureResult};
pub use generate::{GeneratorConfig, ImageGenerator};
pub use local::read_local_image;
pub use texture::{TextureFormat, TextureImage};
