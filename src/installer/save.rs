//! Custom map installation.
//!
//! A save is a live directory tree the game reads and writes, so it is always
//! extracted in full into `gameDir/saves/<archive file stem>/` and never linked.

use super::{InstallLog, InstallSummary, InstalledContent, Placement};
use crate::archive::ContentArchive;
use crate::constants::SUBDIR_SAVES;
use crate::core::{Content, McciError};
use crate::utils::fs::ensure_dir;
use std::path::Path;
use tracing::warn;

pub(crate) fn install_save(
    content: &Content,
    game_dir: &Path,
    log: &mut InstallLog<'_>,
    summary: &mut InstallSummary,
) -> Result<(), McciError> {
    let source = content.source();
    let world_name = source.file_stem().ok_or_else(|| McciError::Other {
        message: format!("{} has no file name", source.display()),
    })?;

    let dest_dir = game_dir.join(SUBDIR_SAVES).join(world_name);
    ensure_dir(&dest_dir).map_err(|e| McciError::io_failure("create directory", &dest_dir, e))?;

    let mut archive = ContentArchive::open(source)?;
    let entries =
        archive.entries().map_err(|e| McciError::io_failure("read archive", source, e))?;

    for entry in entries {
        let Some(relative) = entry.relative_path else {
            log.line(format!("Skipping unsafe entry {}", entry.name));
            warn!("Archive {} has unsafe entry {}", source.display(), entry.name);
            summary.skip(&entry.name, "entry path escapes the save directory");
            continue;
        };

        let target = dest_dir.join(relative);
        if entry.is_dir {
            ensure_dir(&target)
                .map_err(|e| McciError::io_failure("create directory", &target, e))?;
            continue;
        }

        log.line(format!("Extracting {} into {}", entry.name, target.display()));
        archive
            .extract_entry(entry.index, &target)
            .map_err(|e| McciError::io_failure("extract entry", &target, e))?;
    }

    summary.installed.push(InstalledContent {
        kind: content.kind(),
        destination: dest_dir,
        placement: Placement::Extracted,
    });
    Ok(())
}
