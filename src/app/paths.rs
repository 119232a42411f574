// SPDX-License-Identifier: MPL-2.0
//! Resolution of the directory holding `settings.toml`.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override**: parameter to [`get_app_config_dir_with_override`] (tests)
//! 2. **CLI argument** (`--config-dir`), set once via [`init_cli_overrides`]
//! 3. **Environment variable** (`FACE_REPLACER_CONFIG_DIR`)
//! 4. **Platform default** via the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "FaceReplacer";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FACE_REPLACER_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        eprintln!("[paths] CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/FaceReplacer/`
/// - macOS: `~/Library/Application Support/FaceReplacer/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\FaceReplacer\`
///
/// Returns `None` if the platform directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
