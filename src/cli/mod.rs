//! Command-line interface for MCCI (Minecraft Content Installer).
//!
//! # Available Commands
//!
//! - `install` - Detect content files and install them into a profile
//! - `detect` - Report the content kind of files without installing
//! - `profile` - List, show, create and select launcher profiles
//! - `config` - Show or initialise the global configuration
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//! - `--no-progress` - Disable the spinner
//! - `--config` - Path to a custom config file
//! - `--profiles` - Path to a custom `launcher_profiles.json`
//!
//! # Example
//!
//! ```bash
//! # Install a mod into the selected launcher profile
//! mcci install ~/Downloads/examplemod-1.0.jar
//!
//! # Install a bundle into a specific directory, copying instead of linking
//! mcci install modpack.zip --game-dir ~/games/modded --copy
//!
//! # Create and select a profile
//! mcci profile new Modded ~/games/modded --select
//! ```

mod config;
mod detect;
mod install;
mod profile;

use crate::config::GlobalConfig;
use crate::profile::ProfileStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration for CLI execution.
///
/// Global flags are collected here and handed to each command instead of
/// being written to the process environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: Option<String>,

    /// Suppress progress lines and summaries.
    pub quiet: bool,

    /// Disable the spinner.
    pub no_progress: bool,

    /// Custom path to the global configuration file.
    pub config_path: Option<PathBuf>,

    /// Custom path to the launcher profile list.
    pub profiles_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the `tracing` subscriber writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over [`CliConfig::log_level`]. Calling this
    /// more than once is harmless.
    pub fn init_logging(&self) {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new(self.log_level.as_deref().unwrap_or("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Loads the global configuration honouring `--config`.
    pub async fn load_global(&self) -> Result<GlobalConfig> {
        GlobalConfig::load_with_optional(self.config_path.clone()).await
    }

    /// Path of the global configuration honouring `--config`.
    pub fn global_config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => GlobalConfig::default_path(),
        }
    }

    /// Loads the launcher profile list honouring `--profiles`.
    pub async fn load_profiles(&self, config: &GlobalConfig) -> Result<ProfileStore> {
        let launcher_dir = config.minecraft_dir()?;
        let path = match &self.profiles_path {
            Some(path) => path.clone(),
            None => config.launcher_profiles_path()?,
        };
        ProfileStore::load(&path, &launcher_dir).await
    }
}

/// Main CLI structure for MCCI.
#[derive(Parser, Debug)]
#[command(
    name = "mcci",
    about = "Minecraft Content Installer - install mods, resource packs and maps into launcher profiles",
    version,
    long_about = "MCCI detects what kind of Minecraft content an archive holds (Forge mod, resource pack, \
                  saved world, or a bundle of those) and installs it into a launcher profile's game directory."
)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global configuration file (default: ~/.mcci/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to launcher_profiles.json (default: inside the launcher directory)
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    /// Disable the progress spinner
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install content files into a profile
    Install(install::InstallCommand),

    /// Show which kind of content files are
    Detect(detect::DetectCommand),

    /// Manage launcher profiles
    Profile(profile::ProfileCommand),

    /// Manage the global configuration
    Config(config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command with logging set up from the global flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            no_progress: self.no_progress,
            config_path: self.config.clone(),
            profiles_path: self.profiles.clone(),
        }
    }

    /// Execute with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Install(cmd) => cmd.execute(&config).await,
            Commands::Detect(cmd) => cmd.execute(&config).await,
            Commands::Profile(cmd) => cmd.execute(&config).await,
            Commands::Config(cmd) => cmd.execute(&config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_levels() {
        let cli = Cli::try_parse_from(["mcci", "--verbose", "detect", "a.jar"]).unwrap();
        assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));

        let cli = Cli::try_parse_from(["mcci", "detect", "a.jar", "--quiet"]).unwrap();
        let config = cli.build_config();
        assert_eq!(config.log_level.as_deref(), Some("error"));
        assert!(config.quiet);

        let cli = Cli::try_parse_from(["mcci", "detect", "a.jar"]).unwrap();
        assert_eq!(cli.build_config().log_level, None);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["mcci", "-v", "-q", "detect", "a.jar"]).is_err());
    }

    #[test]
    fn test_global_paths() {
        let cli = Cli::try_parse_from([
            "mcci",
            "profile",
            "list",
            "--config",
            "/tmp/mcci.toml",
            "--profiles",
            "/tmp/launcher_profiles.json",
            "--no-progress",
        ])
        .unwrap();
        let config = cli.build_config();
        assert_eq!(config.config_path, Some(PathBuf::from("/tmp/mcci.toml")));
        assert_eq!(config.profiles_path, Some(PathBuf::from("/tmp/launcher_profiles.json")));
        assert!(config.no_progress);
    }

    #[test]
    fn test_install_requires_files() {
        assert!(Cli::try_parse_from(["mcci", "install"]).is_err());
    }

    #[test]
    fn test_install_profile_conflicts_with_game_dir() {
        let result = Cli::try_parse_from([
            "mcci",
            "install",
            "a.jar",
            "--profile",
            "Modded",
            "--game-dir",
            "/g",
        ]);
        assert!(result.is_err());
    }
}
