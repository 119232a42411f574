// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration entries.

// ==========================================================================
// Export Defaults
// ==========================================================================

/// File name proposed by the save dialog when exporting.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "output.png";

/// Extension enforced on exported files.
pub const EXPORT_EXTENSION: &str = "png";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_EXPORT_FILE_NAME.is_empty());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_export_name_uses_export_extension() {
        assert!(DEFAULT_EXPORT_FILE_NAME.ends_with(&format!(".{EXPORT_EXTENSION}")));
    }
}
