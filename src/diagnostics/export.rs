// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostic reports to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Default report file name, stamped with the local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("face_replacer_diagnostics_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Directory proposed by the save dialog: Documents, else the working directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

/// Writes `content` through a temporary sibling file and renames it into place.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }
    Ok(())
}
