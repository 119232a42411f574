// SPDX-License-Identifier: MPL-2.0
//! Editor sub-state: pointer interaction and message routing.

pub mod interaction;
pub mod routing;

pub use interaction::{CursorHint, Interaction};
