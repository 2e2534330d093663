//! MCCI - Minecraft Content Installer
//!
//! Classifies Minecraft content archives and installs them into the game
//! directory of a launcher profile.
//!
//! # Architecture Overview
//!
//! Installation is a two step pipeline:
//!
//! 1. The [`detector`] opens a file as a zip archive and decides which
//!    [`ContentKind`](core::ContentKind) it is from the marker files it
//!    contains: `mcmod.info` for Forge mods, `level.dat` for saved worlds and
//!    `pack.mcmeta` for resource packs. An archive with no marker but with
//!    nested `.zip`/`.jar` content is a collection.
//! 2. The [`installer`] places the content under the profile's game
//!    directory. Mods and resource packs are hard linked (copied when the
//!    filesystem refuses), worlds are extracted under `saves/`, and
//!    collections are unpacked into a scratch directory and each member is
//!    installed in turn.
//!
//! Profiles come from the launcher's `launcher_profiles.json`, see
//! [`profile`].
//!
//! # Core Modules
//!
//! - [`archive`] - Read-only zip access with safe entry paths
//! - [`cli`] - Command-line interface
//! - [`config`] - Global configuration (`~/.mcci/config.toml`)
//! - [`core`] - Content model and error handling
//! - [`detector`] - Content classification
//! - [`installer`] - Placement, extraction and collection expansion
//! - [`profile`] - Launcher profiles and the profile store
//! - [`utils`] - Filesystem, platform and progress helpers
//!
//! # Command-Line Usage
//!
//! ```bash
//! # What is this file?
//! mcci detect ~/Downloads/SkyBlock.zip
//!
//! # Install into the selected launcher profile
//! mcci install ~/Downloads/examplemod-1.0.jar ~/Downloads/Faithful.zip
//!
//! # Install into an explicit profile
//! mcci install --profile Modded ~/Downloads/modpack.zip
//! ```
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use mcci_cli::installer::{InstallLog, Installer};
//! use mcci_cli::profile::Profile;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), mcci_cli::core::McciError> {
//! let profile = Profile::new("Modded", "/home/steve/games/modded")?;
//! let mut lines: Vec<String> = Vec::new();
//! let summary = Installer::default().install_path(
//!     Path::new("examplemod-1.0.jar"),
//!     &profile,
//!     &mut InstallLog::new(&mut lines),
//! )?;
//! println!("installed {} item(s)", summary.installed.len());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod detector;
pub mod installer;
pub mod profile;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
