//! Filesystem helpers for mkcpp.
//!
//! Thin wrappers over `std::fs` that attach the offending path to the error
//! message. Writes are plain, not atomic: every file written here lives in a
//! directory this process created moments earlier, so there is no existing
//! state to protect.

use crate::error::{MkcppError, Result};
use std::fs;
use std::path::Path;

/// Create a single directory. The parent must already exist.
pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| MkcppError::Filesystem {
        context: format!("failed to create directory '{}'", path.display()),
        source: e,
    })
}

/// Write string content to a file, creating or truncating it.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| MkcppError::Filesystem {
        context: format!("failed to write '{}'", path.display()),
        source: e,
    })
}

/// Mark a generated script executable: read/write/execute for the owner,
/// read-only for group and others.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o744)).map_err(|e| {
        MkcppError::Filesystem {
            context: format!("failed to set permissions on '{}'", path.display()),
            source: e,
        }
    })
}

/// Non-Unix platforms have no executable bit to set.
#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
