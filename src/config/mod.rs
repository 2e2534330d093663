//! Configuration management for MCCI
//!
//! MCCI reads two files:
//!
//! 1. **Global configuration** (`~/.mcci/config.toml`) - MCCI's own settings,
//!    handled by [`GlobalConfig`]
//! 2. **Launcher profiles** (`<minecraft_dir>/launcher_profiles.json`) - owned
//!    by the Minecraft launcher, handled by [`crate::profile::ProfileStore`]
//!
//! The global file is optional; every setting has a default.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcci_cli::config::GlobalConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GlobalConfig::load().await?;
//! println!("Launcher directory: {}", config.minecraft_dir()?.display());
//!
//! let installer = config.installer();
//! # Ok(())
//! # }
//! ```

mod global;

pub use global::GlobalConfig;
