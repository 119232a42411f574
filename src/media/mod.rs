// SPDX-License-Identifier: MPL-2.0
//! Image loading and export compositing.
//!
//! - [`image`]: decoding raster and SVG files into RGBA [`ImageData`]
//! - [`compose`]: flattening the base image and placed overlays into a PNG

pub mod compose;
pub mod image;

pub use compose::{compose, encode_png, render_export, save_png, Composition, Layer, RenderedExport};
pub use image::{load_image, ImageData};

/// Supported file extensions for the open dialogs.
pub mod extensions {
    /// Image file extensions accepted for the base image and the overlays.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];

    /// Export is always PNG.
    pub const EXPORT_EXTENSIONS: &[&str] = &["png"];
}
