//! File system utilities for cross-platform file operations
//!
//! - [`dirs`] - directory creation and removal
//! - [`atomic`] - write-then-rename file updates
//! - [`copy`] - stream copy and attribute-preserving file copy
//! - [`temp`] - scratch directories removed on drop
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcci_cli::utils::fs::{ensure_dir, safe_write, TempDir};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("/games/modded/mods"))?;
//! safe_write(Path::new("/games/launcher_profiles.json"), "{}")?;
//!
//! let scratch = TempDir::new("probe")?;
//! println!("Scratch space: {}", scratch.path().display());
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod copy;
pub mod dirs;
pub mod temp;

pub use atomic::{atomic_write, safe_write};
pub use copy::{copy_preserving_mtime, copy_stream};
pub use dirs::{ensure_dir, ensure_parent_dir, remove_dir_all};
pub use temp::TempDir;
