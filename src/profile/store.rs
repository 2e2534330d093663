//! The launcher's `launcher_profiles.json`.
//!
//! ```json
//! {
//!   "profiles": {
//!     "Modded": { "name": "Modded", "gameDir": "/games/modded", "lastVersionId": "1.7.10" }
//!   },
//!   "selectedProfile": "Modded"
//! }
//! ```
//!
//! Only `name`, `gameDir` and `selectedProfile` are interpreted. Everything
//! else, at the top level or inside a profile, is written back as it was
//! read. A profile without `gameDir` plays in the launcher directory itself,
//! and such profiles are written back without one.

use super::Profile;
use crate::core::McciError;
use crate::utils::fs::atomic_write;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default, Serialize, Deserialize)]
struct LauncherFile {
    #[serde(default)]
    profiles: Map<String, Value>,
    #[serde(rename = "selectedProfile", default, skip_serializing_if = "Option::is_none")]
    selected_profile: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredProfile {
    #[serde(default)]
    name: String,
    #[serde(rename = "gameDir", default, skip_serializing_if = "Option::is_none")]
    game_dir: Option<PathBuf>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Profiles of one launcher installation, sorted by name.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    launcher_dir: PathBuf,
    profiles: Vec<Profile>,
    selected: Option<String>,
    extra: Map<String, Value>,
}

impl ProfileStore {
    /// An empty store that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>, launcher_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            launcher_dir: launcher_dir.into(),
            profiles: Vec::new(),
            selected: None,
            extra: Map::new(),
        }
    }

    /// Loads the profile list at `path`.
    ///
    /// A missing file yields an empty store. Profiles without a `gameDir`
    /// resolve to `launcher_dir`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, or with
    /// [`McciError::ProfilesParseError`] when it is not a valid profile list.
    /// A malformed file is never replaced by an empty one.
    pub async fn load(path: &Path, launcher_dir: &Path) -> Result<Self> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No launcher profiles at {}, starting empty", path.display());
                return Ok(Self::new(path, launcher_dir));
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read launcher profiles from {}", path.display())
                });
            }
        };

        Ok(Self::parse(path, launcher_dir, &content)?)
    }

    fn parse(path: &Path, launcher_dir: &Path, content: &str) -> Result<Self, McciError> {
        let parse_error = |reason: String| McciError::ProfilesParseError {
            file: path.display().to_string(),
            reason,
        };

        let file: LauncherFile =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let mut profiles = Vec::with_capacity(file.profiles.len());
        for (key, value) in file.profiles {
            let stored: StoredProfile = serde_json::from_value(value)
                .map_err(|e| parse_error(format!("profile '{key}': {e}")))?;

            let name = if stored.name.trim().is_empty() {
                key.clone()
            } else {
                stored.name
            };
            if name.trim().is_empty() {
                warn!("Ignoring unnamed launcher profile in {}", path.display());
                continue;
            }

            let game_dir = match stored.game_dir {
                Some(dir) if dir.is_absolute() => dir,
                Some(dir) => launcher_dir.join(dir),
                None => launcher_dir.to_path_buf(),
            };
            profiles.push(Profile::from_stored(key, name, game_dir, stored.extra));
        }
        profiles.sort();
        profiles.dedup();

        Ok(Self {
            path: path.to_path_buf(),
            launcher_dir: launcher_dir.to_path_buf(),
            profiles,
            selected: file.selected_profile,
            extra: file.extra,
        })
    }

    /// Path the store is saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Launcher directory used for profiles without their own game directory.
    #[must_use]
    pub fn launcher_dir(&self) -> &Path {
        &self.launcher_dir
    }

    /// All profiles, sorted case-insensitively by name.
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Looks a profile up by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.has_name(name))
    }

    /// Adds `profile`, replacing any profile with the same name.
    ///
    /// A replacement without a launcher key or launcher fields of its own
    /// inherits those of the profile it replaces.
    pub fn add(&mut self, mut profile: Profile) {
        match self.profiles.binary_search(&profile) {
            Ok(index) => {
                let replaced = &mut self.profiles[index];
                if profile.key.is_none() {
                    profile.key = replaced.key.take();
                }
                if profile.extra.is_empty() {
                    profile.extra = std::mem::take(&mut replaced.extra);
                }
                *replaced = profile;
            }
            Err(index) => self.profiles.insert(index, profile),
        }
    }

    /// Selects the profile called `name`.
    pub fn select(&mut self, name: &str) -> Result<(), McciError> {
        let profile = self.get(name).ok_or_else(|| McciError::ProfileNotFound {
            name: name.to_string(),
        })?;
        self.selected = Some(profile.name().to_string());
        Ok(())
    }

    /// Adds `profile` if it is not already present, then selects it.
    pub fn select_profile(&mut self, profile: Profile) {
        let name = profile.name().to_string();
        if self.get(&name).is_none() {
            self.add(profile);
        }
        self.selected = Some(name);
    }

    /// Name recorded as selected, whether or not such a profile exists.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected profile.
    pub fn selected(&self) -> Result<&Profile, McciError> {
        let name = self.selected.as_deref().ok_or(McciError::NoProfileSelected)?;
        self.get(name).ok_or_else(|| McciError::ProfileNotFound {
            name: name.to_string(),
        })
    }

    fn to_launcher_file(&self) -> Result<LauncherFile, McciError> {
        let mut profiles = Map::new();
        for profile in &self.profiles {
            let stored = StoredProfile {
                name: profile.name().to_string(),
                game_dir: (profile.game_dir() != self.launcher_dir.as_path())
                    .then(|| profile.game_dir().to_path_buf()),
                extra: profile.extra().clone(),
            };
            let value = serde_json::to_value(stored).map_err(|e| McciError::Other {
                message: format!("Failed to serialize profile '{}': {e}", profile.name()),
            })?;
            let key = profile.key().unwrap_or_else(|| profile.name());
            profiles.insert(key.to_string(), value);
        }

        Ok(LauncherFile {
            profiles,
            selected_profile: self.selected.clone(),
            extra: self.extra.clone(),
        })
    }

    /// Writes the store back to [`ProfileStore::path`] atomically.
    pub async fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_launcher_file()?)
            .context("Failed to serialize launcher profiles")?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || atomic_write(&path, json.as_bytes()))
            .await
            .context("Launcher profile write task panicked")??;

        debug!("Saved {} profiles to {}", self.profiles.len(), self.path.display());
        Ok(())
    }
}
