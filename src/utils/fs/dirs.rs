//! Directory creation and removal.
//!
//! These return plain [`std::io::Result`] so the install pipeline can attach
//! the failing step to an [`McciError::IoFailure`](crate::core::McciError).

use std::fs;
use std::io;
use std::path::Path;

/// Ensures a directory exists, creating it and all missing parents.
///
/// # Errors
///
/// Fails if creation fails or if `path` exists but is not a directory.
///
/// # Examples
///
/// ```rust,no_run
/// use mcci_cli::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> std::io::Result<()> {
/// ensure_dir(Path::new("/games/modded/mods"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    let safe_path = crate::utils::platform::windows_long_path(path);

    if !safe_path.exists() {
        fs::create_dir_all(&safe_path)
    } else if safe_path.is_dir() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", path.display()),
        ))
    }
}

/// Ensures that the parent directory of a file path exists.
///
/// Paths without a parent (bare file names, filesystem roots) are left alone.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Recursively removes a directory; a missing directory is not an error.
///
/// Symlinks are removed rather than followed.
pub fn remove_dir_all(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(path),
        Ok(_) => fs::remove_dir_all(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
