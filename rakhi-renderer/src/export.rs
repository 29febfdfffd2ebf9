//! Design export to image formats.
//!
//! Renders a design to PNG, JPEG, or SVG through an SVG intermediate and the
//! resvg/tiny-skia rasterization pipeline. Export renders from the model with
//! no selection overlay, so handles and dashed boxes can never leak into
//! output regardless of what the editing surface is showing.

use std::fmt::Write;

use image::ImageEncoder;
use rakhi_core::Design;
use tracing::info;

use crate::error::{RenderError, RenderResult};
use crate::svg::render_scene;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
    /// SVG vector graphics (returns the SVG XML string as UTF-8 bytes).
    Svg,
}

/// Configuration for design export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output pixels per canvas unit (default: 2.0 for crisp sharing).
    pub pixel_ratio: f32,
    /// Background color as RGBA bytes (default: opaque white, matching the
    /// editing surface).
    pub background: [u8; 4],
    /// JPEG quality 1-100 (default: 85).
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pixel_ratio: 2.0,
            background: [255, 255, 255, 255],
            jpeg_quality: 85,
        }
    }
}

/// Exports a [`Design`] to image formats.
pub struct DesignExporter {
    config: ExportConfig,
}

impl DesignExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Export a design to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the design cannot be rasterized or encoded.
    pub fn export(&self, design: &Design, format: ExportFormat) -> RenderResult<Vec<u8>> {
        match format {
            ExportFormat::Png => self.render_to_png(design),
            ExportFormat::Jpeg => self.render_to_jpeg(design),
            ExportFormat::Svg => Ok(self.render_to_svg(design).into_bytes()),
        }
    }

    /// Export the design to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    pub fn render_to_png(&self, design: &Design) -> RenderResult<Vec<u8>> {
        let svg_string = self.render_to_svg(design);
        let pixmap = Self::rasterize(&svg_string)?;
        info!(
            width = pixmap.width(),
            height = pixmap.height(),
            "design exported to png"
        );

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Export the design to JPEG bytes.
    ///
    /// JPEG has no alpha channel; pixels are composited over the configured
    /// background first.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_to_jpeg(&self, design: &Design) -> RenderResult<Vec<u8>> {
        let svg_string = self.render_to_svg(design);
        let pixmap = Self::rasterize(&svg_string)?;

        let (width, height) = (pixmap.width(), pixmap.height());
        let bg = &self.config.background;
        let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
        for pixel in pixmap.data().chunks_exact(4) {
            let alpha = f32::from(pixel[3]) / 255.0;
            let inv = 1.0 - alpha;
            rgb_data.push((f32::from(pixel[0]).mul_add(alpha, f32::from(bg[0]) * inv)) as u8);
            rgb_data.push((f32::from(pixel[1]).mul_add(alpha, f32::from(bg[1]) * inv)) as u8);
            rgb_data.push((f32::from(pixel[2]).mul_add(alpha, f32::from(bg[2]) * inv)) as u8);
        }

        let mut buf = std::io::Cursor::new(Vec::new());
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, self.config.jpeg_quality);
        encoder
            .write_image(&rgb_data, width, height, image::ColorType::Rgb8.into())
            .map_err(|e| RenderError::Export(format!("JPEG encoding failed: {e}")))?;

        info!(width, height, "design exported to jpeg");
        Ok(buf.into_inner())
    }

    /// Render the design to an export-ready SVG string.
    ///
    /// Output width/height carry the pixel ratio; the viewBox stays in
    /// canvas units. A background rect is drawn first since the editing
    /// surface's backing color is not part of the model.
    #[must_use]
    pub fn render_to_svg(&self, design: &Design) -> String {
        let (out_w, out_h) = self.output_dimensions(design);
        let view_w = design.canvas_width;
        let view_h = design.canvas_height;

        let mut svg = String::with_capacity(4096);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{out_w}\" height=\"{out_h}\" viewBox=\"0 0 {view_w} {view_h}\">",
        );

        let bg = &self.config.background;
        let bg_alpha = f32::from(bg[3]) / 255.0;
        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"100%\" fill=\"rgba({},{},{},{bg_alpha})\"/>",
            bg[0], bg[1], bg[2],
        );

        render_scene(&mut svg, design);
        svg.push_str("</svg>");
        svg
    }

    /// Output dimensions (width, height) in pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn output_dimensions(&self, design: &Design) -> (u32, u32) {
        let out_w = (design.canvas_width.max(1.0) * self.config.pixel_ratio) as u32;
        let out_h = (design.canvas_height.max(1.0) * self.config.pixel_ratio) as u32;
        (out_w.max(1), out_h.max(1))
    }

    /// Rasterize an SVG string to a tiny-skia pixmap.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rasterize(svg_string: &str) -> RenderResult<tiny_skia::Pixmap> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg_string, &opt)
            .map_err(|e| RenderError::Raster(format!("SVG parsing failed: {e}")))?;

        let px_w = tree.size().width() as u32;
        let px_h = tree.size().height() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
            .ok_or_else(|| RenderError::Raster("Failed to create pixmap".to_string()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}
