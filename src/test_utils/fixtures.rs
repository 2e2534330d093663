//! Zip fixtures for content archives
//!
//! [`ArchiveFixture`] builds mods, resource packs, saves and collections in
//! memory and writes them to disk. Collections are built by nesting fixtures.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::{CompressionMethod, ZipWriter};
use zip::write::SimpleFileOptions;

#[derive(Clone, Debug)]
enum FixtureEntry {
    File(String, Vec<u8>),
    Dir(String),
    /// Stored uncompressed and damaged after writing so its CRC no longer matches.
    Corrupt(String, Vec<u8>),
}

/// Builder for zip archives used in tests.
///
/// # Example
///
/// ```rust,no_run
/// use mcci_cli::test_utils::ArchiveFixture;
/// use std::path::Path;
///
/// let collection = ArchiveFixture::new()
///     .nested("a.jar", ArchiveFixture::forge_mod())
///     .file("notes.txt", "not content")
///     .write_to(Path::new("/tmp/bundle.zip"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArchiveFixture {
    entries: Vec<FixtureEntry>,
}

impl ArchiveFixture {
    /// An empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// A minimal Forge mod: `mcmod.info` plus a class file.
    pub fn forge_mod() -> Self {
        Self::new()
            .file("mcmod.info", r#"[{"modid": "examplemod", "version": "1.0"}]"#)
            .file("com/example/ExampleMod.class", b"\xCA\xFE\xBA\xBE")
    }

    /// A minimal resource pack.
    pub fn resource_pack() -> Self {
        Self::new()
            .file("pack.mcmeta", r#"{"pack": {"pack_format": 1, "description": "test"}}"#)
            .file("assets/minecraft/textures/blocks/stone.png", b"\x89PNG")
    }

    /// A minimal saved world with one region file.
    pub fn custom_map() -> Self {
        Self::new()
            .file("level.dat", b"\x1F\x8B\x08\x00")
            .dir("region/")
            .file("region/r.0.0.mca", "region data")
    }

    /// Adds a file entry.
    pub fn file(mut self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        self.entries.push(FixtureEntry::File(name.to_string(), contents.as_ref().to_vec()));
        self
    }

    /// Adds a directory entry; `name` should end in `/`.
    pub fn dir(mut self, name: &str) -> Self {
        self.entries.push(FixtureEntry::Dir(name.to_string()));
        self
    }

    /// Adds an entry whose data fails its checksum when extracted.
    ///
    /// The archive itself still opens and lists the entry; only reading it
    /// fails. `contents` must not occur elsewhere in the archive.
    pub fn corrupt(mut self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        self.entries.push(FixtureEntry::Corrupt(name.to_string(), contents.as_ref().to_vec()));
        self
    }

    /// Adds another fixture as a nested archive entry.
    pub fn nested(self, name: &str, inner: ArchiveFixture) -> Self {
        let bytes = inner.to_bytes();
        self.file(name, bytes)
    }

    /// Serialises the archive to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for entry in &self.entries {
            match entry {
                FixtureEntry::File(name, contents) => {
                    writer.start_file(name.as_str(), options).expect("start zip entry");
                    writer.write_all(contents).expect("write zip entry");
                }
                FixtureEntry::Dir(name) => {
                    writer.add_directory(name.as_str(), options).expect("add zip directory");
                }
                FixtureEntry::Corrupt(name, contents) => {
                    let stored = options.compression_method(CompressionMethod::Stored);
                    writer.start_file(name.as_str(), stored).expect("start zip entry");
                    writer.write_all(contents).expect("write zip entry");
                }
            }
        }

        let mut bytes = writer.finish().expect("finish zip archive").into_inner();
        for entry in &self.entries {
            if let FixtureEntry::Corrupt(_, contents) = entry {
                let start = bytes
                    .windows(contents.len())
                    .position(|window| window == contents.as_slice())
                    .expect("stored entry data in archive");
                bytes[start] ^= 0xFF;
            }
        }
        bytes
    }

    /// Writes the archive to `path`, creating parent directories, and returns `path`.
    pub fn write_to(&self, path: &Path) -> PathBuf {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture directory");
        }
        std::fs::write(path, self.to_bytes()).expect("write fixture archive");
        path.to_path_buf()
    }
}

/// Writes a launcher profile list with the given `(key, name, gameDir)` triples.
///
/// `selected` becomes `selectedProfile` when set.
pub fn write_launcher_profiles(
    path: &Path,
    profiles: &[(&str, &str, Option<&Path>)],
    selected: Option<&str>,
) -> PathBuf {
    let mut map = serde_json::Map::new();
    for (key, name, game_dir) in profiles {
        let mut profile = serde_json::Map::new();
        profile.insert("name".into(), (*name).into());
        if let Some(dir) = game_dir {
            profile.insert("gameDir".into(), dir.to_string_lossy().into_owned().into());
        }
        map.insert((*key).to_string(), profile.into());
    }

    let mut root = serde_json::Map::new();
    root.insert("profiles".into(), map.into());
    if let Some(selected) = selected {
        root.insert("selectedProfile".into(), selected.into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create launcher directory");
    }
    let json = serde_json::to_string_pretty(&serde_json::Value::Object(root))
        .expect("serialise launcher profiles");
    std::fs::write(path, json).expect("write launcher profiles");
    path.to_path_buf()
}
