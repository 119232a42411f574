// SPDX-License-Identifier: MPL-2.0
//! Shared visual constants.
//!
//! [`canvas`] holds what the editor draws over the photo; the other modules
//! size and color the sidebar and the toasts. Canvas strokes and markers
//! are measured in display pixels, independent of the image zoom.

use iced::Color;

/// Decorations drawn on the editing canvas.
pub mod canvas {
    use super::Color;

    /// Selection outline and handle marker stroke.
    pub const SELECTION: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const HANDLE_FILL: Color = Color::WHITE;

    /// Width of placeholder and selection outlines.
    pub const OUTLINE_WIDTH: f32 = 1.0;
    /// Dash pattern (on, off) of placeholder and selection outlines.
    pub const DASH: [f32; 2] = [5.0, 5.0];

    pub const HANDLE_MARKER_RADIUS: f32 = 5.0;

    pub const LABEL_SIZE: f32 = 14.0;
    /// Gap between an element box and the baseline of its label.
    pub const LABEL_OFFSET: f32 = 5.0;

    /// Letterbox color around the photo.
    pub const BACKDROP: Color = Color::from_rgb(0.1, 0.1, 0.1);
}

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Muted text and hover tint.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Notification severities
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Alpha of the toast dismiss button on hover and press.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const SIDEBAR_WIDTH: f32 = 290.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Height of the export preview in the sidebar.
    pub const PREVIEW_HEIGHT: f32 = 180.0;
}

pub mod typography {
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Frames around the canvas and the preview.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent border.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toast elevation.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_SM);
    assert!(canvas::HANDLE_MARKER_RADIUS > 0.0);
};
