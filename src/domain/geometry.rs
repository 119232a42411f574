// SPDX-License-Identifier: MPL-2.0
//! Center-anchored boxes, resize handles and hit-testing.
//!
//! All coordinates are image pixels. A box is described by its center and
//! its size, which is the natural frame for the drag and resize rules: a
//! drag moves the center, a handle moves one or two edges.

// =============================================================================
// Bounds
// =============================================================================

/// Smallest width or height a box may be resized to.
pub const MIN_BOX_SIZE: f32 = 10.0;

/// Maximum pointer distance for a resize handle to be grabbed.
pub const HANDLE_HIT_RADIUS: f32 = 10.0;

// =============================================================================
// Point / Vector
// =============================================================================

/// A position in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Offset that moves `from` onto `self`.
    #[must_use]
    pub fn delta_from(self, from: Point) -> Vector {
        Vector {
            dx: self.x - from.x,
            dy: self.y - from.y,
        }
    }
}

/// A pointer displacement between two move ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub dx: f32,
    pub dy: f32,
}

impl Vector {
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

// =============================================================================
// Handle
// =============================================================================

/// One of the eight resize anchors of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl Handle {
    /// All handles in hit-test order. The first match wins.
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
    ];
}

// =============================================================================
// CenteredBox
// =============================================================================

/// Axis-aligned box described by its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CenteredBox {
    /// Creates a box, clamping the size to [`MIN_BOX_SIZE`].
    #[must_use]
    pub fn new(center: Point, width: f32, height: f32) -> Self {
        Self {
            x: center.x,
            y: center.y,
            width: width.max(MIN_BOX_SIZE),
            height: height.max(MIN_BOX_SIZE),
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Top-left corner, the origin used when drawing into the box.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    /// Returns `true` if `point` lies inside the box (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Position of a single handle.
    #[must_use]
    pub fn handle_position(&self, handle: Handle) -> Point {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let (x, y) = match handle {
            Handle::TopLeft => (self.x - half_w, self.y - half_h),
            Handle::TopRight => (self.x + half_w, self.y - half_h),
            Handle::BottomLeft => (self.x - half_w, self.y + half_h),
            Handle::BottomRight => (self.x + half_w, self.y + half_h),
            Handle::Top => (self.x, self.y - half_h),
            Handle::Bottom => (self.x, self.y + half_h),
            Handle::Left => (self.x - half_w, self.y),
            Handle::Right => (self.x + half_w, self.y),
        };
        Point::new(x, y)
    }

    /// All eight handles with their positions, in hit-test order.
    #[must_use]
    pub fn handles(&self) -> [(Handle, Point); 8] {
        Handle::ALL.map(|handle| (handle, self.handle_position(handle)))
    }

    /// First handle whose center lies within `radius` of `point`.
    #[must_use]
    pub fn handle_at(&self, point: Point, radius: f32) -> Option<Handle> {
        self.handles()
            .into_iter()
            .find(|(_, position)| position.distance(point) <= radius)
            .map(|(handle, _)| handle)
    }

    /// Moves the box center by `delta`.
    pub fn translate(&mut self, delta: Vector) {
        self.x += delta.dx;
        self.y += delta.dy;
    }

    /// Applies an incremental handle drag, then clamps the size.
    ///
    /// Corners move both adjacent edges, edge midpoints move a single
    /// dimension. The center shifts by the full delta on the dragged side,
    /// matching the pointer-relative behavior users expect while dragging.
    pub fn resize(&mut self, handle: Handle, delta: Vector) {
        let Vector { dx, dy } = delta;
        match handle {
            Handle::TopLeft => {
                self.x += dx;
                self.y += dy;
                self.width -= dx;
                self.height -= dy;
            }
            Handle::TopRight => {
                self.y += dy;
                self.width += dx;
                self.height -= dy;
            }
            Handle::BottomLeft => {
                self.x += dx;
                self.width -= dx;
                self.height += dy;
            }
            Handle::BottomRight => {
                self.width += dx;
                self.height += dy;
            }
            Handle::Top => {
                self.y += dy;
                self.height -= dy;
            }
            Handle::Bottom => {
                self.height += dy;
            }
            Handle::Left => {
                self.x += dx;
                self.width -= dx;
            }
            Handle::Right => {
                self.width += dx;
            }
        }

        self.width = self.width.max(MIN_BOX_SIZE);
        self.height = self.height.max(MIN_BOX_SIZE);
    }
}
