// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Straight-alpha RGBA bytes, kept for export compositing.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from straight-alpha RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Wraps a decoded `image` crate buffer.
    #[must_use]
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::from_rgba(width, height, image.into_vec())
    }

    /// Returns a reference to the RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Copies the pixels into an `image` crate buffer.
    ///
    /// Returns `None` if the stored byte count does not match the dimensions.
    #[must_use]
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized at their intrinsic size using resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The raster data is invalid or unsupported ([`Error::Image`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        rasterize_svg(&svg_data)
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;
        let (width, height) = img.dimensions();
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

fn rasterize_svg(svg_data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; compositing expects straight alpha.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(ImageData::from_rgba(width, height, pixels))
}
