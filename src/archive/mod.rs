//! Zip-compatible archive access for content files.
//!
//! Mods, resource packs, saves and collections are all zip containers (a
//! `.jar` is a zip). [`ContentArchive`] wraps [`zip::ZipArchive`] with the
//! four operations the detector and installer need:
//!
//! - probing whether a file is a zip at all, without treating "not a zip" as an error
//! - listing entries
//! - testing for an exact top-level entry name
//! - streaming one entry to a destination path
//!
//! Entry paths are sanitised through [`zip::read::ZipFile::enclosed_name`]:
//! names that are absolute or climb out with `..` have no relative path and
//! must never be written.

use crate::core::McciError;
use crate::utils::fs::copy_stream;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

/// One entry of a [`ContentArchive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Position in the archive's central directory.
    pub index: usize,
    /// Raw entry name as stored in the archive.
    pub name: String,
    /// Sanitised relative path, or `None` when the name would escape the
    /// extraction root.
    pub relative_path: Option<PathBuf>,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// An opened zip container.
pub struct ContentArchive {
    path: PathBuf,
    zip: ZipArchive<BufReader<File>>,
}

impl std::fmt::Debug for ContentArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentArchive")
            .field("path", &self.path)
            .field("entries", &self.zip.len())
            .finish()
    }
}

impl ContentArchive {
    /// Opens `path` as a zip archive if it is one.
    ///
    /// Returns `Ok(None)` when the file exists but is not a readable zip
    /// container. Only failures to read the file itself are errors.
    pub fn probe(path: &Path) -> io::Result<Option<Self>> {
        let file = File::open(path)?;
        match ZipArchive::new(BufReader::new(file)) {
            Ok(zip) => Ok(Some(Self {
                path: path.to_path_buf(),
                zip,
            })),
            Err(ZipError::Io(e)) if !is_format_error(&e) => Err(e),
            Err(e) => {
                tracing::trace!("{} is not a zip archive: {e}", path.display());
                Ok(None)
            }
        }
    }

    /// Opens `path` as a zip archive, failing if it is not one.
    pub fn open(path: &Path) -> Result<Self, McciError> {
        match Self::probe(path) {
            Ok(Some(archive)) => Ok(archive),
            Ok(None) => Err(McciError::io_failure(
                "open archive",
                path,
                io::Error::new(io::ErrorKind::InvalidData, "not a zip archive"),
            )),
            Err(e) => Err(McciError::io_failure("open archive", path, e)),
        }
    }

    /// Path the archive was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    /// Returns true if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }

    /// Exact-name test for an entry, e.g. `mcmod.info` at the archive root.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.zip.index_for_name(name).is_some()
    }

    /// Lists every entry in central directory order.
    pub fn entries(&mut self) -> io::Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(self.zip.len());
        for index in 0..self.zip.len() {
            let file = self.zip.by_index_raw(index).map_err(zip_to_io)?;
            entries.push(ArchiveEntry {
                index,
                name: file.name().to_string(),
                relative_path: file.enclosed_name(),
                is_dir: file.is_dir(),
            });
        }
        Ok(entries)
    }

    /// Streams the decompressed bytes of entry `index` to `dest`.
    ///
    /// Parent directories of `dest` are created. Returns the bytes written.
    pub fn extract_entry(&mut self, index: usize, dest: &Path) -> io::Result<u64> {
        let mut file = self.zip.by_index(index).map_err(zip_to_io)?;
        copy_stream(&mut file, dest)
    }
}

/// I/O errors that zip reports while parsing structure rather than reading
/// the device, such as a file too short to hold an end-of-directory record.
fn is_format_error(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData)
}

fn zip_to_io(e: ZipError) -> io::Error {
    match e {
        ZipError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}
