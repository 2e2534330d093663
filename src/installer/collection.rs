//! Collection installation.
//!
//! A collection is only a carrier: entries ending in `.zip` or `.jar` are
//! extracted into a scratch directory, detected one level deeper, and
//! installed into the same game directory. Every other entry is ignored
//! without a log line. A member that fails to extract or is not recognised is
//! skipped; failures while placing a recognised member abort the install.
//!
//! The scratch directory is owned by a [`TempDir`] and goes away on every exit
//! path. Files already hard linked into the profile keep their data after the
//! scratch copy is removed.

use super::{InstallLog, InstallSummary, Installer};
use crate::archive::ContentArchive;
use crate::constants::is_nested_archive_name;
use crate::core::{Content, McciError};
use crate::utils::fs::TempDir;
use std::path::Path;
use tracing::warn;

pub(crate) fn install_collection(
    installer: &Installer,
    content: &Content,
    game_dir: &Path,
    log: &mut InstallLog<'_>,
    summary: &mut InstallSummary,
    depth: usize,
) -> Result<(), McciError> {
    let source = content.source();
    let mut archive = ContentArchive::open(source)?;
    let entries =
        archive.entries().map_err(|e| McciError::io_failure("read archive", source, e))?;

    let scratch = TempDir::new("install")
        .map_err(|e| McciError::io_failure("create scratch directory", std::env::temp_dir(), e))?;

    for entry in entries {
        if entry.is_dir || !is_nested_archive_name(&entry.name) {
            continue;
        }

        let Some(relative) = entry.relative_path else {
            log.line(format!("Skipping unsafe entry {}", entry.name));
            warn!("Archive {} has unsafe entry {}", source.display(), entry.name);
            summary.skip(&entry.name, "entry path escapes the extraction directory");
            continue;
        };

        let member = scratch.path().join(relative);
        log.line(format!("Extracting {} to {}", entry.name, member.display()));
        if let Err(e) = archive.extract_entry(entry.index, &member) {
            log.line(format!("Failed to extract {}: {e}", entry.name));
            warn!("Failed to extract {} from {}: {e}", entry.name, source.display());
            summary.skip(&entry.name, format!("extraction failed: {e}"));
            continue;
        }

        match installer.detector().detect_at_depth(&member, depth + 1) {
            Ok(nested) => installer.install_at_depth(&nested, game_dir, log, summary, depth + 1)?,
            Err(_) => {
                log.line(format!("{} wasn't content, ignoring", entry.name));
                summary.skip(&entry.name, "not recognised content");
            }
        }
    }

    Ok(())
}
