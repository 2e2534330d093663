//! Single-file placement: hard link with a copy fallback.

use super::{InstallLog, InstalledContent};
use crate::core::{Content, McciError};
use crate::utils::fs::{copy_preserving_mtime, ensure_dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How single-file content is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// Hard link, copying when the filesystem refuses the link.
    #[default]
    Auto,
    /// Always copy, keeping permissions and modification time.
    Copy,
}

/// How a file ended up at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Destination is a hard link to the source.
    HardLinked,
    /// Destination is a copy of the source.
    Copied,
    /// Destination already was the source file.
    AlreadyInPlace,
    /// Archive contents were extracted into the destination directory.
    Extracted,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::HardLinked => "hard linked",
            Self::Copied => "copied",
            Self::AlreadyInPlace => "already in place",
            Self::Extracted => "extracted",
        })
    }
}

/// Places a mod or resource pack at `gameDir/<subdir>/<file name>`.
pub(crate) fn install_single(
    content: &Content,
    game_dir: &Path,
    mode: LinkMode,
    log: &mut InstallLog<'_>,
) -> Result<InstalledContent, McciError> {
    let source = content.source();
    let file_name = content.file_name().ok_or_else(|| McciError::Other {
        message: format!("{} has no file name", source.display()),
    })?;

    let dest_dir = game_dir.join(content.dest_subdir());
    ensure_dir(&dest_dir).map_err(|e| McciError::io_failure("create directory", &dest_dir, e))?;
    let dest = dest_dir.join(file_name);

    let verb = match mode {
        LinkMode::Auto => "Linking",
        LinkMode::Copy => "Copying",
    };
    log.line(format!("{verb} {} to {}", source.display(), dest.display()));

    let placement =
        place_file(source, &dest, mode).map_err(|e| McciError::io_failure("install", &dest, e))?;

    Ok(InstalledContent {
        kind: content.kind(),
        destination: dest,
        placement,
    })
}

/// Puts `src` at `dest`, replacing whatever file is there.
pub fn place_file(src: &Path, dest: &Path, mode: LinkMode) -> io::Result<Placement> {
    place_file_with(src, dest, mode, |src, dest| fs::hard_link(src, dest))
}

/// [`place_file`] with the hard-link primitive supplied by the caller.
pub(crate) fn place_file_with<F>(
    src: &Path,
    dest: &Path,
    mode: LinkMode,
    link: F,
) -> io::Result<Placement>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    if is_same_path(src, dest)? {
        debug!("{} is already in place", dest.display());
        return Ok(Placement::AlreadyInPlace);
    }

    // Placed under a sibling name first so a failed install never costs the
    // file already at `dest`.
    let staging = staging_path(dest);
    let placement = match stage(src, &staging, mode, link) {
        Ok(placement) => placement,
        Err(e) => {
            discard(&staging);
            return Err(e);
        }
    };

    if let Err(e) = fs::rename(&staging, dest) {
        discard(&staging);
        return Err(e);
    }
    // Renaming onto a hard link of the same file is a no-op that leaves the
    // staging name behind.
    discard(&staging);
    Ok(placement)
}

fn stage<F>(src: &Path, staging: &Path, mode: LinkMode, link: F) -> io::Result<Placement>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    if mode == LinkMode::Auto {
        match link(src, staging) {
            Ok(()) => return Ok(Placement::HardLinked),
            Err(e) if link_unsupported(&e) => {
                debug!("Hard link to {} refused ({e}), copying instead", staging.display());
                discard(staging);
            }
            Err(e) => return Err(e),
        }
    }

    copy_preserving_mtime(src, staging)?;
    Ok(Placement::Copied)
}

fn staging_path(dest: &Path) -> PathBuf {
    let name = dest.file_name().map_or_else(|| "content".into(), |n| n.to_string_lossy());
    dest.with_file_name(format!(".{name}.mcci-{}.tmp", uuid::Uuid::new_v4()))
}

fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => debug!("Failed to remove {}: {e}", path.display()),
    }
}

/// Link failures that mean "this filesystem boundary can't link", not a real fault.
pub(crate) fn link_unsupported(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::CrossesDevices
            | io::ErrorKind::Unsupported
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::TooManyLinks
    )
}

fn is_same_path(src: &Path, dest: &Path) -> io::Result<bool> {
    match fs::canonicalize(dest) {
        Ok(dest) => Ok(fs::canonicalize(src)? == dest),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
