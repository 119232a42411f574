// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the scene and capturing pointer input.

pub mod canvas;

pub use canvas::{FaceCanvas, FrameSurface};
