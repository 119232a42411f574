// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events captured during a session are stored in a memory-bounded circular
//! buffer and can be exported as JSON for troubleshooting.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer; [`DiagnosticsHandle`]s feed it
//!   and [`DiagnosticsCollector::export_to_file`] writes the JSON report

mod buffer;
mod collector;
mod events;
mod export;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use export::{default_export_directory, generate_default_filename};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
