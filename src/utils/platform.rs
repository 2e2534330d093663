//! Platform-specific utilities and cross-platform compatibility helpers
//!
//! MCCI needs to find the same things on every platform: the user's home
//! directory, the Minecraft launcher directory, and a place for its own
//! configuration. The launcher uses a different location on each OS:
//!
//! | Platform | Launcher directory |
//! |----------|--------------------|
//! | Windows  | `%APPDATA%\.minecraft` |
//! | macOS    | `~/Library/Application Support/minecraft` |
//! | Linux    | `~/.minecraft` |
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcci_cli::utils::platform::{default_minecraft_dir, resolve_path};
//!
//! # fn example() -> anyhow::Result<()> {
//! let launcher = default_minecraft_dir()?;
//! println!("Launcher directory: {}", launcher.display());
//!
//! let game_dir = resolve_path("~/games/modded")?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Checks if the current platform is Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Gets the home directory path for the current user.
///
/// # Errors
///
/// Fails when the platform home directory cannot be determined (for example
/// `HOME` unset on Unix or `USERPROFILE` unset on Windows).
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine home directory.\n\n{platform_help}")
    })
}

/// Returns the Minecraft launcher directory for the current platform.
///
/// This is where `launcher_profiles.json` lives and where a profile without an
/// explicit game directory installs its content.
pub fn default_minecraft_dir() -> Result<PathBuf> {
    if is_windows() {
        let appdata = dirs::config_dir().context(
            "Could not determine the application data directory.\n\n\
            On Windows: Check that the APPDATA environment variable is set",
        )?;
        Ok(appdata.join(".minecraft"))
    } else if cfg!(target_os = "macos") {
        Ok(get_home_dir()?.join("Library").join("Application Support").join("minecraft"))
    } else {
        Ok(get_home_dir()?.join(".minecraft"))
    }
}

/// Returns MCCI's own configuration directory.
///
/// - Windows: `%LOCALAPPDATA%\mcci`
/// - Elsewhere: `~/.mcci`
pub fn get_config_dir() -> Result<PathBuf> {
    if is_windows() {
        let local = dirs::data_local_dir().context(
            "Could not determine the local application data directory.\n\n\
            On Windows: Check that the LOCALAPPDATA environment variable is set",
        )?;
        Ok(local.join("mcci"))
    } else {
        Ok(get_home_dir()?.join(".mcci"))
    }
}

/// Resolves a path with tilde expansion and environment variable substitution.
///
/// # Supported Patterns
///
/// - `~/path` - Expands to `{home}/path`
/// - `$VAR/path` and `${VAR}/path` - Expands environment variables
///
/// # Errors
///
/// Fails on `~user` style paths, on undefined variables, and when the home
/// directory cannot be determined.
///
/// # Examples
///
/// ```rust,no_run
/// use mcci_cli::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let saves = resolve_path("~/.minecraft/saves")?;
/// # #[cfg(unix)]
/// let from_env = resolve_path("$HOME/games")?;
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = if let Some(stripped) = path.strip_prefix("~/") {
        get_home_dir()?.join(stripped)
    } else if path == "~" {
        get_home_dir()?
    } else if path.starts_with('~') {
        return Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for home directory.\n\
            Use '~/' followed by a relative path, like '~/games/modded'"
        ));
    } else {
        PathBuf::from(path)
    };

    let path_str = expanded.to_string_lossy();
    let expanded_str = shellexpand::env(&path_str)
        .with_context(|| {
            format!(
                "Failed to expand environment variables in path: {path_str}\n\n\
                Common issues:\n\
                - Undefined environment variable (e.g., $UNDEFINED_VAR)\n\
                - Invalid variable syntax (use $VAR or ${{VAR}})"
            )
        })?
        .into_owned();

    Ok(windows_long_path(Path::new(&expanded_str)))
}

/// Converts a long Windows path to the `\\?\` extended form.
///
/// Paths over 260 characters are made absolute and prefixed so Win32 APIs
/// accept them. Deeply nested save folders hit this limit in practice.
#[cfg(windows)]
pub fn windows_long_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str.len() <= 260 || path_str.starts_with(r"\\?\") {
        return path.to_path_buf();
    }

    let absolute_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let absolute_str = absolute_path.to_string_lossy();
    if absolute_str.len() <= 260 {
        absolute_path
    } else if let Some(stripped) = absolute_str.strip_prefix(r"\\") {
        PathBuf::from(format!(r"\\?\UNC\{stripped}"))
    } else {
        PathBuf::from(format!(r"\\?\{absolute_str}"))
    }
}

/// No-op on platforms without a path length limit.
#[cfg(not(windows))]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}
