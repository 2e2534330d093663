//! Global configuration management for MCCI.
//!
//! The global configuration file holds user-wide defaults: where the launcher
//! lives, how single-file content is placed, and how deep collections may nest.
//!
//! # Configuration File Location
//!
//! - **Unix/macOS**: `~/.mcci/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\mcci\config.toml`
//!
//! The location can be overridden with the `MCCI_CONFIG_PATH` environment
//! variable or the `--config` flag.
//!
//! # File Format
//!
//! ```toml
//! # Launcher directory holding launcher_profiles.json
//! minecraft_dir = "~/.minecraft"
//!
//! # "auto" hard links and falls back to copying; "copy" always copies
//! link_mode = "auto"
//!
//! # Collections nested deeper than this are not recognised
//! max_nesting_depth = 8
//! ```

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_MAX_NESTING_DEPTH, LAUNCHER_PROFILES_FILE};
use crate::detector::Detector;
use crate::installer::{Installer, LinkMode};
use crate::utils::fs::safe_write;
use crate::utils::platform::{default_minecraft_dir, get_config_dir, resolve_path};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

const fn default_max_nesting_depth() -> usize {
    DEFAULT_MAX_NESTING_DEPTH
}

fn is_default_max_nesting_depth(depth: &usize) -> bool {
    *depth == DEFAULT_MAX_NESTING_DEPTH
}

fn is_default_link_mode(mode: &LinkMode) -> bool {
    *mode == LinkMode::default()
}

/// Global MCCI configuration.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Launcher directory. `~` and environment variables are expanded.
    ///
    /// Default: the platform `.minecraft` directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minecraft_dir: Option<String>,

    /// Placement of mods and resource packs.
    #[serde(default, skip_serializing_if = "is_default_link_mode")]
    pub link_mode: LinkMode,

    /// Maximum collection-within-collection depth for detection and install.
    #[serde(
        default = "default_max_nesting_depth",
        skip_serializing_if = "is_default_max_nesting_depth"
    )]
    pub max_nesting_depth: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            minecraft_dir: None,
            link_mode: LinkMode::default(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl GlobalConfig {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Loads the configuration from `path`, or from the default location.
    ///
    /// A missing file yields the default configuration.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid TOML for this schema.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config from {}", path.display()))
    }

    /// Writes the configuration to `path` as pretty TOML.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize global config")?;

        let target = path.to_path_buf();
        tokio::task::spawn_blocking(move || safe_write(&target, &content))
            .await
            .context("Config write task panicked")?
            .with_context(|| format!("Failed to write global config to {}", path.display()))
    }

    /// Default config path.
    ///
    /// `MCCI_CONFIG_PATH` wins when set; otherwise `config.toml` in the
    /// platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Launcher directory with `~` and environment variables expanded.
    pub fn minecraft_dir(&self) -> Result<PathBuf> {
        match &self.minecraft_dir {
            Some(dir) => resolve_path(dir)
                .with_context(|| format!("Invalid minecraft_dir in config: {dir}")),
            None => default_minecraft_dir(),
        }
    }

    /// Path of the launcher profile list.
    pub fn launcher_profiles_path(&self) -> Result<PathBuf> {
        Ok(self.minecraft_dir()?.join(LAUNCHER_PROFILES_FILE))
    }

    /// Detector honouring `max_nesting_depth`.
    #[must_use]
    pub const fn detector(&self) -> Detector {
        Detector::with_max_depth(self.max_nesting_depth)
    }

    /// Installer honouring `link_mode` and `max_nesting_depth`.
    #[must_use]
    pub const fn installer(&self) -> Installer {
        Installer::new(self.detector(), self.link_mode)
    }

    /// A commented starter file for `mcci config init`.
    #[must_use]
    pub fn init_example() -> String {
        format!(
            "# MCCI configuration\n\
             \n\
             # Launcher directory holding launcher_profiles.json\n\
             # minecraft_dir = \"~/.minecraft\"\n\
             \n\
             # \"auto\" hard links mods and resource packs, copying when that fails;\n\
             # \"copy\" always copies\n\
             link_mode = \"auto\"\n\
             \n\
             # Collections nested deeper than this are not recognised\n\
             max_nesting_depth = {DEFAULT_MAX_NESTING_DEPTH}\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_default() {
        let temp = tempdir().unwrap();
        let config =
            GlobalConfig::load_with_optional(Some(temp.path().join("none.toml"))).await.unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let config = GlobalConfig {
            minecraft_dir: Some("/games/launcher".to_string()),
            link_mode: LinkMode::Copy,
            max_nesting_depth: 3,
        };
        config.save_to(&path).await.unwrap();

        let loaded = GlobalConfig::load_from(&path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_defaults_not_serialized() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        GlobalConfig::default().save_to(&path).await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.trim().is_empty(), "unexpected content: {content}");
    }

    #[tokio::test]
    async fn test_init_example_parses() {
        let config: GlobalConfig = toml::from_str(&GlobalConfig::init_example()).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn test_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "link_mode = \"sometimes\"").unwrap();

        let err = GlobalConfig::load_from(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse global config"));
    }

    #[test]
    fn test_minecraft_dir_expansion() {
        let config = GlobalConfig {
            minecraft_dir: Some("~/launcher".to_string()),
            ..GlobalConfig::default()
        };
        let home = crate::utils::platform::get_home_dir().unwrap();
        assert_eq!(config.minecraft_dir().unwrap(), home.join("launcher"));
        assert_eq!(
            config.launcher_profiles_path().unwrap(),
            home.join("launcher").join("launcher_profiles.json")
        );
    }

    #[test]
    fn test_installer_from_config() {
        let config = GlobalConfig {
            link_mode: LinkMode::Copy,
            max_nesting_depth: 2,
            ..GlobalConfig::default()
        };
        let installer = config.installer();
        assert_eq!(installer.link_mode(), LinkMode::Copy);
        assert_eq!(installer.detector().max_depth(), 2);
    }

    #[test]
    #[serial_test::serial]
    fn test_default_path_env_override() {
        let temp = tempdir().unwrap();
        let custom = temp.path().join("custom.toml");

        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &custom);
        }
        let path = GlobalConfig::default_path().unwrap();
        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
        }

        assert_eq!(path, custom);
    }
}
