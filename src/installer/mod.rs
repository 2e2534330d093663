//! Installation of classified content into a profile.
//!
//! Each [`ContentKind`] has its own placement policy:
//!
//! - **Forge mods and resource packs** are placed as a single file at
//!   `gameDir/<subdir>/<file name>`, hard linked when the filesystem allows it
//!   and copied otherwise (see [`link`]).
//! - **Custom maps** are fully extracted into `gameDir/saves/<file stem>/`
//!   (see [`save`]).
//! - **Collections** extract their nested `.zip`/`.jar` members into a scratch
//!   directory and detect and install each of them against the same profile
//!   (see [`collection`]).
//!
//! Every action is reported as a line through an [`InstallLog`]; a silent log
//! is legal everywhere. The outcome is returned as an [`InstallSummary`].
//!
//! # Example
//!
//! ```rust,no_run
//! use mcci_cli::installer::{InstallLog, Installer};
//! use mcci_cli::profile::Profile;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let profile = Profile::new("Modded", "/games/modded")?;
//! let mut lines = Vec::<String>::new();
//!
//! let summary = Installer::default().install_path(
//!     Path::new("downloads/foo.jar"),
//!     &profile,
//!     &mut InstallLog::new(&mut lines),
//! )?;
//! assert_eq!(summary.installed.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod link;
pub mod save;


pub use link::{LinkMode, Placement};

use crate::core::{Content, ContentKind, McciError};
use crate::detector::Detector;
use crate::profile::Profile;
use crate::utils::progress::ProgressSink;
use std::path::{Path, PathBuf};

/// Optional progress sink threaded through an install.
///
/// Every line is also emitted at `debug` level through `tracing`, so a silent
/// log still leaves a trace with `--verbose`.
pub struct InstallLog<'a> {
    sink: Option<&'a mut dyn ProgressSink>,
}

impl<'a> InstallLog<'a> {
    /// Log writing to `sink`.
    pub fn new<S: ProgressSink>(sink: &'a mut S) -> Self {
        Self {
            sink: Some(sink),
        }
    }

    /// Log that discards lines.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            sink: None,
        }
    }

    /// Appends one line.
    pub fn line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        tracing::debug!("{line}");
        if let Some(sink) = self.sink.as_mut() {
            sink.append_line(line);
        }
    }
}

impl std::fmt::Debug for InstallLog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallLog").field("silent", &self.sink.is_none()).finish()
    }
}

/// One piece of content placed into the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledContent {
    /// Kind of the placed content.
    pub kind: ContentKind,
    /// Installed file, or the save directory for custom maps.
    pub destination: PathBuf,
    /// How it got there.
    pub placement: Placement,
}

/// A collection member that was not installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Entry name inside its archive.
    pub entry: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of an install call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    /// Placed content in install order.
    pub installed: Vec<InstalledContent>,
    /// Entries skipped along the way.
    pub skipped: Vec<SkippedEntry>,
}

impl InstallSummary {
    pub(crate) fn skip(&mut self, entry: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedEntry {
            entry: entry.to_string(),
            reason: reason.into(),
        });
    }
}

/// Installs content into profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Installer {
    detector: Detector,
    link_mode: LinkMode,
}

impl Installer {
    /// Creates an installer; `detector` also classifies collection members.
    #[must_use]
    pub const fn new(detector: Detector, link_mode: LinkMode) -> Self {
        Self {
            detector,
            link_mode,
        }
    }

    /// The detector used for collection members.
    #[must_use]
    pub const fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Placement strategy for single-file kinds.
    #[must_use]
    pub const fn link_mode(&self) -> LinkMode {
        self.link_mode
    }

    /// Detects `source` and installs it into `profile`.
    ///
    /// Logs `Detecting content type` first and `Done!` once the install
    /// finished.
    pub fn install_path(
        &self,
        source: &Path,
        profile: &Profile,
        log: &mut InstallLog<'_>,
    ) -> Result<InstallSummary, McciError> {
        log.line("Detecting content type");
        let content = self.detector.detect(source)?;
        let summary = self.install(&content, profile, log)?;
        log.line("Done!");
        Ok(summary)
    }

    /// Installs already classified content into `profile`.
    ///
    /// # Errors
    ///
    /// [`McciError::IoFailure`] for the first step that could not be carried
    /// out. The log holds every line written up to that point.
    pub fn install(
        &self,
        content: &Content,
        profile: &Profile,
        log: &mut InstallLog<'_>,
    ) -> Result<InstallSummary, McciError> {
        let mut summary = InstallSummary::default();
        self.install_at_depth(content, profile.game_dir(), log, &mut summary, 0)?;
        Ok(summary)
    }

    pub(crate) fn install_at_depth(
        &self,
        content: &Content,
        game_dir: &Path,
        log: &mut InstallLog<'_>,
        summary: &mut InstallSummary,
        depth: usize,
    ) -> Result<(), McciError> {
        match content.kind() {
            ContentKind::ForgeMod | ContentKind::ResourcePack => {
                let installed = link::install_single(content, game_dir, self.link_mode, log)?;
                summary.installed.push(installed);
            }
            ContentKind::CustomMap => save::install_save(content, game_dir, log, summary)?,
            ContentKind::Collection => {
                collection::install_collection(self, content, game_dir, log, summary, depth)?;
            }
        }
        Ok(())
    }
}
