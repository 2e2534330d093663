//! The closed set of installable content kinds.
//!
//! Every file MCCI installs is classified as exactly one [`ContentKind`]. A
//! kind knows the profile subdirectory it lands in and, for the single-archive
//! kinds, the marker entry that identifies it. Classification itself lives in
//! [`crate::detector`]; placement lives in [`crate::installer`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{
    FORGE_MOD_MARKER, LEVEL_DAT_MARKER, PACK_MCMETA_MARKER, SUBDIR_COLLECTION, SUBDIR_MODS,
    SUBDIR_RESOURCE_PACKS, SUBDIR_SAVES,
};

/// Kinds of content MCCI knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// A Minecraft Forge mod (`mcmod.info` at the archive root)
    ForgeMod,
    /// A resource pack (`pack.mcmeta` at the archive root)
    ResourcePack,
    /// A saved world (`level.dat` at the archive root)
    CustomMap,
    /// An archive carrying other content archives
    Collection,
}

impl ContentKind {
    /// Registration order used by the detector.
    ///
    /// Validity tests are mutually exclusive (see [`ContentKind::MARKER_PRECEDENCE`]),
    /// so this order only affects how many probes run before a match.
    pub const REGISTERED: [ContentKind; 4] = [
        ContentKind::ForgeMod,
        ContentKind::ResourcePack,
        ContentKind::CustomMap,
        ContentKind::Collection,
    ];

    /// Kinds with a marker entry, strongest first.
    ///
    /// An archive belongs to the first kind here whose marker it carries. Mod
    /// jars routinely ship a `pack.mcmeta` as well, so `mcmod.info` outranks it.
    pub const MARKER_PRECEDENCE: [ContentKind; 3] =
        [ContentKind::ForgeMod, ContentKind::CustomMap, ContentKind::ResourcePack];

    /// Profile subdirectory this kind is installed into.
    #[must_use]
    pub const fn dest_subdir(self) -> &'static str {
        match self {
            Self::ForgeMod => SUBDIR_MODS,
            Self::ResourcePack => SUBDIR_RESOURCE_PACKS,
            Self::CustomMap => SUBDIR_SAVES,
            Self::Collection => SUBDIR_COLLECTION,
        }
    }

    /// Top-level archive entry identifying this kind, if it has one.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::ForgeMod => Some(FORGE_MOD_MARKER),
            Self::ResourcePack => Some(PACK_MCMETA_MARKER),
            Self::CustomMap => Some(LEVEL_DAT_MARKER),
            Self::Collection => None,
        }
    }

    /// Human-readable name used in logs and CLI output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ForgeMod => "Forge mod",
            Self::ResourcePack => "resource pack",
            Self::CustomMap => "custom map",
            Self::Collection => "content collection",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified piece of content bound to its source file.
///
/// Instances only come out of the detector, so holding a `Content` means the
/// source passed its kind's validity test. The source path is absolute and
/// never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    kind: ContentKind,
    source: PathBuf,
}

impl Content {
    pub(crate) fn new(kind: ContentKind, source: &Path) -> io::Result<Self> {
        Ok(Self {
            kind,
            source: std::path::absolute(source)?,
        })
    }

    /// The detected kind.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Absolute path of the source file.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Profile subdirectory this content is installed into.
    #[must_use]
    pub const fn dest_subdir(&self) -> &'static str {
        self.kind.dest_subdir()
    }

    /// Final path component of the source, used as the installed file name.
    #[must_use]
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.source.file_name()
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.source.display(), self.kind)
    }
}
