//! Stream and file copy helpers shared by archive extraction and the
//! link-or-copy placement.

use crate::utils::fs::dirs::ensure_parent_dir;
use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Streams `reader` into a new file at `dest`, creating parent directories.
///
/// An existing file at `dest` is truncated. Returns the number of bytes written.
pub fn copy_stream<R: Read + ?Sized>(reader: &mut R, dest: &Path) -> io::Result<u64> {
    ensure_parent_dir(dest)?;

    let mut out = fs::File::create(dest)?;
    let written = io::copy(reader, &mut out)?;
    out.flush()?;
    Ok(written)
}

/// Copies `src` to `dest` keeping permissions and the last-modified time.
///
/// [`fs::copy`] already carries permission bits across; the modification time
/// is applied afterwards.
pub fn copy_preserving_mtime(src: &Path, dest: &Path) -> io::Result<u64> {
    let bytes = fs::copy(src, dest)?;
    let meta = fs::metadata(src)?;
    set_file_mtime(dest, FileTime::from_last_modification_time(&meta))?;
    Ok(bytes)
}
