// SPDX-License-Identifier: MPL-2.0
//! Export compositing.
//!
//! Flattens the base image and the placed overlays into a single RGBA
//! buffer the size of the base, then encodes it as PNG. Only elements with
//! an assigned overlay become layers; placeholders and selection
//! decorations exist on screen only.

use super::ImageData;
use crate::domain::geometry::CenteredBox;
use crate::error::{Error, Result};
use image_rs::imageops::{self, FilterType};
use image_rs::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// An overlay image stretched into a box on the base.
#[derive(Debug, Clone)]
pub struct Layer {
    pub image: ImageData,
    pub bounds: CenteredBox,
}

/// Everything needed to render an export, detached from the editor state
/// so it can be moved to a background task.
#[derive(Debug, Clone)]
pub struct Composition {
    pub base: ImageData,
    /// Layers in drawing order (later layers on top).
    pub layers: Vec<Layer>,
}

/// Encoded export plus a displayable copy for the preview panel.
#[derive(Debug, Clone)]
pub struct RenderedExport {
    pub png: Arc<Vec<u8>>,
    pub preview: ImageData,
}

/// Renders the composition into a new buffer the size of the base image.
///
/// Each layer is resized to its rounded box size with a bilinear filter and
/// alpha-blended at its rounded top-left corner. Parts falling outside the
/// base are clipped.
///
/// # Errors
///
/// Returns [`Error::Image`] if an image holds a pixel buffer that does not
/// match its dimensions.
pub fn compose(composition: &Composition) -> Result<RgbaImage> {
    let mut canvas = composition
        .base
        .to_rgba_image()
        .ok_or_else(|| Error::Image("base image buffer does not match its size".into()))?;

    for layer in &composition.layers {
        let source = layer
            .image
            .to_rgba_image()
            .ok_or_else(|| Error::Image("overlay buffer does not match its size".into()))?;

        // Box sizes are clamped to at least 10px, so the casts never see zero.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (
            layer.bounds.width.round() as u32,
            layer.bounds.height.round() as u32,
        );
        let resized = imageops::resize(&source, width, height, FilterType::Triangle);

        let origin = layer.bounds.origin();
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (origin.x.round() as i64, origin.y.round() as i64);
        imageops::overlay(&mut canvas, &resized, x, y);
    }

    Ok(canvas)
}

/// Encodes an RGBA buffer as PNG bytes.
///
/// # Errors
///
/// Returns an error if the encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Composes and encodes in one step, keeping the pixels for the preview.
///
/// # Errors
///
/// See [`compose`] and [`encode_png`].
pub fn render_export(composition: &Composition) -> Result<RenderedExport> {
    let flattened = compose(composition)?;
    let png = encode_png(&flattened)?;
    Ok(RenderedExport {
        png: Arc::new(png),
        preview: ImageData::from_rgba_image(flattened),
    })
}

/// Writes encoded PNG bytes to `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn save_png<P: AsRef<Path>>(path: P, png: &[u8]) -> Result<()> {
    std::fs::write(path, png)?;
    Ok(())
}
