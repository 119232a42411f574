// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use crate::error::{Error, Result};

use super::export::write_atomic;
use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ReportMetadata, SerializableEvent, UserAction,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and usable from any thread. Events travel through a
/// bounded channel and are dropped when it is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking; drop if the channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (monotonic clock for durations).
    collection_started_at: Instant,
    /// When collection started (wall clock for report metadata).
    collection_started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("collection_started_at_utc", &self.collection_started_at_utc)
            .finish_non_exhaustive()
    }
}

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Call on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly to the buffer, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action, details });
        self.buffer.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates over stored events, oldest first (test-only accessor).
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Exports all collected events as a JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Drains pending events and writes the JSON report to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn export_to_file(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.process_pending();
        let path = path.as_ref();
        let json = self
            .export_json()
            .map_err(|err| Error::Io(format!("report serialization failed: {err}")))?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport { metadata, events }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
