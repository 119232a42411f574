// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core editing rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the
//! interaction rules can be tested without a window or a GPU.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`element`]: The three face elements ([`ElementKind`](element::ElementKind),
//!   [`ElementMap`](element::ElementMap))
//! - [`geometry`]: Boxes, handles and hit-testing ([`CenteredBox`](geometry::CenteredBox),
//!   [`Handle`](geometry::Handle))

pub mod diagnostics;
pub mod element;
pub mod geometry;
