//! Launcher profiles.
//!
//! A [`Profile`] names a game directory content is installed into. Profiles
//! come from the Minecraft launcher's `launcher_profiles.json`, managed by
//! [`ProfileStore`], or are built ad hoc (for `mcci install --game-dir`).
//!
//! Names are compared case-insensitively, both for equality and for the
//! order profiles are listed in.

mod store;

pub use store::ProfileStore;

use crate::core::McciError;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// A named game directory.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    game_dir: PathBuf,
    /// Key of the profile in the launcher file, when it was loaded from one.
    key: Option<String>,
    /// Launcher fields MCCI doesn't interpret, written back untouched.
    extra: Map<String, Value>,
}

impl Profile {
    /// Creates a profile; `game_dir` is made absolute.
    ///
    /// # Errors
    ///
    /// [`McciError::InvalidProfile`] if `name` is blank or `game_dir` cannot
    /// be made absolute.
    pub fn new(name: impl Into<String>, game_dir: impl AsRef<Path>) -> Result<Self, McciError> {
        Ok(Self {
            name: validate_name(name.into())?,
            game_dir: absolute_dir(game_dir.as_ref())?,
            key: None,
            extra: Map::new(),
        })
    }

    pub(crate) fn from_stored(
        key: String,
        name: String,
        game_dir: PathBuf,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            name,
            game_dir,
            key: Some(key),
            extra,
        }
    }

    /// Profile name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute game directory. It need not exist yet.
    #[must_use]
    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    pub(crate) fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub(crate) fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Renames the profile.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), McciError> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// Points the profile at another game directory.
    pub fn set_game_dir(&mut self, game_dir: impl AsRef<Path>) -> Result<(), McciError> {
        self.game_dir = absolute_dir(game_dir.as_ref())?;
        Ok(())
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        compare_names(&self.name, name) == Ordering::Equal
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.has_name(&other.name)
    }
}

impl Eq for Profile {}

impl PartialOrd for Profile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Profile {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_names(&self.name, &other.name)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.game_dir.display())
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}

fn validate_name(name: String) -> Result<String, McciError> {
    if name.trim().is_empty() {
        return Err(McciError::InvalidProfile {
            reason: "profile name must not be empty".to_string(),
        });
    }
    Ok(name)
}

fn absolute_dir(dir: &Path) -> Result<PathBuf, McciError> {
    std::path::absolute(dir).map_err(|e| McciError::InvalidProfile {
        reason: format!("invalid game directory {}: {e}", dir.display()),
    })
}
