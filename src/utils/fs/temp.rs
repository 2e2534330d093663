//! Temporary directory management with RAII cleanup.
//!
//! Collection probing and collection installs extract nested archives into a
//! scratch directory. Each scratch directory is owned by a [`TempDir`] and is
//! removed when the owner drops, whether the caller returns normally, skips a
//! member, or bails out with an error.

use crate::utils::fs::dirs::{ensure_dir, remove_dir_all};
use std::io;
use std::path::{Path, PathBuf};

/// A temporary directory that is removed when dropped.
///
/// The directory lives under the system temp directory and is named
/// `mcci_{purpose}_{uuid}`.
///
/// # Examples
///
/// ```rust,no_run
/// use mcci_cli::utils::fs::TempDir;
///
/// # fn example() -> std::io::Result<()> {
/// {
///     let scratch = TempDir::new("probe")?;
///     std::fs::write(scratch.path().join("member.jar"), b"PK")?;
/// } // removed here
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Creates a new scratch directory tagged with `purpose`.
    pub fn new(purpose: &str) -> io::Result<Self> {
        let unique_name = format!("mcci_{}_{}", purpose, uuid::Uuid::new_v4());
        let path = std::env::temp_dir().join(unique_name);

        ensure_dir(&path)?;

        Ok(Self {
            path,
        })
    }

    /// Path of the scratch directory; it exists for as long as `self` does.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if let Err(e) = remove_dir_all(&self.path) {
            tracing::warn!("Failed to remove scratch directory {}: {e}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_removed_on_drop() {
        let temp_dir = TempDir::new("test").unwrap();
        let path = temp_dir.path().to_path_buf();

        assert!(path.is_dir());
        std::fs::create_dir_all(path.join("nested/deeper")).unwrap();
        std::fs::write(path.join("nested/deeper/member.jar"), "data").unwrap();

        drop(temp_dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_dir_removed_on_error_path() {
        fn failing_step(scratch: &TempDir) -> io::Result<()> {
            std::fs::write(scratch.path().join("partial.zip"), "partial")?;
            Err(io::Error::other("extraction failed"))
        }

        let path;
        {
            let scratch = TempDir::new("install").unwrap();
            path = scratch.path().to_path_buf();
            assert!(failing_step(&scratch).is_err());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_dir_names_are_unique() {
        let temp1 = TempDir::new("probe").unwrap();
        let temp2 = TempDir::new("probe").unwrap();

        assert_ne!(temp1.path(), temp2.path());
        assert!(temp1.path().to_string_lossy().contains("mcci_probe_"));
    }
}
