// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structure for JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Version of the application that generated the report
    pub app_version: String,
    /// Operating system and CPU architecture
    pub os: String,
    pub arch: String,
    /// When collection started (RFC 3339)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// A diagnostic event with its timestamp made relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Complete diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}
