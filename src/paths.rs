//! XDG-style path resolution for the configuration directory.

use std::path::PathBuf;

/// Returns the configuration directory for barua.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/barua` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/barua` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| {
            dirs::home_dir()
                .expect("Failed to determine home directory")
                .join(".config")
                .join("barua")
        },
        |xdg| PathBuf::from(xdg).join("barua"),
    )
}
