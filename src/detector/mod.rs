//! Content type detection.
//!
//! The [`Detector`] sniffs an arbitrary file and decides which
//! [`ContentKind`] it is. Each kind has a validity test:
//!
//! | Kind | Test |
//! |------|------|
//! | Forge mod | zip with a top-level `mcmod.info` |
//! | Custom map | zip with a top-level `level.dat` and no `mcmod.info` |
//! | Resource pack | zip with a top-level `pack.mcmeta` and neither of the above |
//! | Collection | zip with no marker at all, carrying at least one `.zip`/`.jar` member that is itself recognised content |
//!
//! The tests are mutually exclusive: an archive carrying several markers
//! belongs to the first of them in [`ContentKind::MARKER_PRECEDENCE`], and a
//! collection never carries a marker. Registration order therefore cannot
//! change a result.
//!
//! Probing a collection extracts candidate members into a scratch
//! [`TempDir`] and runs detection on each one, one level deeper. Member
//! failures of any sort count as "not recognised" and never abort the probe.
//! Recursion stops at the configured nesting depth.

use crate::archive::ContentArchive;
use crate::constants::{DEFAULT_MAX_NESTING_DEPTH, is_nested_archive_name};
use crate::core::{Content, ContentKind, McciError};
use crate::utils::fs::TempDir;
use std::path::Path;
use tracing::{debug, warn};

/// Classifies files into content kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detector {
    max_depth: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector {
    /// Creates a detector with the default nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Creates a detector that recognises at most `max_depth` levels of
    /// collections inside the file being detected.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
        }
    }

    /// Maximum collection nesting depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Detects the kind of `path`.
    ///
    /// # Errors
    ///
    /// [`McciError::UnsupportedContentType`] when no kind matches, including
    /// when the file cannot be read at all.
    pub fn detect(&self, path: &Path) -> Result<Content, McciError> {
        self.detect_at_depth(path, 0)
    }

    /// Runs one kind's validity test against `path`.
    #[must_use]
    pub fn is_kind(&self, kind: ContentKind, path: &Path) -> bool {
        match open_for_probe(path) {
            Some(mut archive) => self.matches(kind, &mut archive, 0),
            None => false,
        }
    }

    /// Detection for a file found `depth` collections below the original input.
    pub(crate) fn detect_at_depth(&self, path: &Path, depth: usize) -> Result<Content, McciError> {
        debug!("Detecting content type of {} (depth {depth})", path.display());

        if let Some(mut archive) = open_for_probe(path) {
            for kind in ContentKind::REGISTERED {
                if self.matches(kind, &mut archive, depth) {
                    debug!("{} is a {kind}", path.display());
                    return Content::new(kind, path)
                        .map_err(|e| McciError::io_failure("resolve source path", path, e));
                }
            }
        }

        Err(McciError::UnsupportedContentType {
            path: path.to_path_buf(),
        })
    }

    fn matches(&self, kind: ContentKind, archive: &mut ContentArchive, depth: usize) -> bool {
        let leading = leading_marker_kind(archive);
        match kind.marker() {
            Some(_) => leading == Some(kind),
            None => leading.is_none() && self.has_recognized_member(archive, depth),
        }
    }

    fn has_recognized_member(&self, archive: &mut ContentArchive, depth: usize) -> bool {
        if depth >= self.max_depth {
            debug!(
                "Not probing members of {}: nesting limit {} reached",
                archive.path().display(),
                self.max_depth
            );
            return false;
        }

        let entries = match archive.entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to list entries of {}: {e}", archive.path().display());
                return false;
            }
        };

        let candidates: Vec<_> = entries
            .into_iter()
            .filter(|entry| !entry.is_dir && is_nested_archive_name(&entry.name))
            .collect();
        if candidates.is_empty() {
            return false;
        }

        let scratch = match TempDir::new("probe") {
            Ok(scratch) => scratch,
            Err(e) => {
                warn!("Failed to create scratch directory for probing: {e}");
                return false;
            }
        };

        for entry in candidates {
            let Some(relative) = entry.relative_path else {
                debug!("Ignoring unsafe entry {} while probing", entry.name);
                continue;
            };
            let member = scratch.path().join(relative);
            if let Err(e) = archive.extract_entry(entry.index, &member) {
                warn!("Failed to extract {} while probing: {e}", entry.name);
                continue;
            }
            if self.detect_at_depth(&member, depth + 1).is_ok() {
                return true;
            }
        }

        false
    }
}

/// Opens a file for probing; anything but a readable zip is "no match".
fn open_for_probe(path: &Path) -> Option<ContentArchive> {
    match ContentArchive::probe(path) {
        Ok(archive) => archive,
        Err(e) => {
            warn!("Could not read {}: {e}", path.display());
            None
        }
    }
}

/// The kind owning the strongest marker present in `archive`, if any.
fn leading_marker_kind(archive: &ContentArchive) -> Option<ContentKind> {
    ContentKind::MARKER_PRECEDENCE
        .into_iter()
        .find(|kind| kind.marker().is_some_and(|marker| archive.contains(marker)))
}
