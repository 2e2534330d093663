//! Cross-platform utilities and helpers
//!
//! # Modules
//!
//! - [`fs`] - Directory handling, atomic writes, copies and scratch directories
//! - [`platform`] - Home, launcher and config directory discovery; path resolution
//! - [`progress`] - Progress sinks and the console spinner
//!
//! # Example
//!
//! ```rust,no_run
//! use mcci_cli::utils::{ensure_dir, safe_write, ProgressSink};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("games/modded/mods"))?;
//! safe_write(Path::new("games/launcher_profiles.json"), "{}")?;
//!
//! let mut log = String::new();
//! log.append_line("Done!");
//! # Ok(())
//! # }
//! ```

pub mod fs;
pub mod platform;
pub mod progress;

pub use fs::{TempDir, atomic_write, ensure_dir, safe_write};
pub use platform::{default_minecraft_dir, get_home_dir, is_windows, resolve_path};
pub use progress::{ConsoleProgress, ProgressSink};
