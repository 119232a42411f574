// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Buffer capacity bounds (50 to 5000 events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 50;
    /// Maximum buffer capacity.
    pub const MAX: usize = 5000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of diagnostic events kept in memory.
///
/// Always within 50..=5000; out-of-range values are clamped.
///
/// # Example
///
/// ```ignore
/// let capacity = BufferCapacity::new(20_000);
/// assert_eq!(capacity.value(), 5000); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}
