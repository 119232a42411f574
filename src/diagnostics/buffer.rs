// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! A memory-bounded ring buffer that evicts the oldest entries when
//! capacity is reached.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use face_replacer::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::default());
///
/// buffer.push(1);
/// buffer.push(2);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a new circular buffer with a raw capacity value.
    ///
    /// Prefer [`CircularBuffer::new`] outside of tests.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_retrieve_in_order() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(5);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(3);

        for value in 1..=5 {
            buffer.push(value);
        }

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer: CircularBuffer<&str> = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn new_uses_buffer_capacity() {
        let buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(500));
        assert_eq!(buffer.capacity(), 500);
    }
}
