//! Global constants used throughout the MCCI codebase.
//!
//! Marker entry names, profile subdirectories and file names that several
//! modules agree on are defined here once.

/// Top-level archive entry identifying a Forge mod.
pub const FORGE_MOD_MARKER: &str = "mcmod.info";

/// Top-level archive entry identifying a resource pack.
pub const PACK_MCMETA_MARKER: &str = "pack.mcmeta";

/// Top-level archive entry identifying a saved world.
pub const LEVEL_DAT_MARKER: &str = "level.dat";

/// Profile subdirectory for mods.
pub const SUBDIR_MODS: &str = "mods";

/// Profile subdirectory for resource packs.
pub const SUBDIR_RESOURCE_PACKS: &str = "resourcepacks";

/// Profile subdirectory for saved worlds.
pub const SUBDIR_SAVES: &str = "saves";

/// Nominal subdirectory of a collection; collections dispatch and never occupy one.
pub const SUBDIR_COLLECTION: &str = ".";

/// File name suffixes of archives a collection may carry.
pub const NESTED_ARCHIVE_SUFFIXES: [&str; 2] = [".zip", ".jar"];

/// Default limit on collection-within-collection nesting.
///
/// Applies to both detection probes and installs; deeper members are treated
/// as unrecognised content.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 8;

/// Launcher profile list file name inside the launcher directory.
pub const LAUNCHER_PROFILES_FILE: &str = "launcher_profiles.json";

/// Environment variable overriding the global config path.
pub const CONFIG_PATH_ENV: &str = "MCCI_CONFIG_PATH";

/// Environment variable disabling spinners.
pub const NO_PROGRESS_ENV: &str = "MCCI_NO_PROGRESS";

/// Returns true if an archive entry name looks like a nested content archive.
#[must_use]
pub fn is_nested_archive_name(name: &str) -> bool {
    NESTED_ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_archive_names() {
        assert!(is_nested_archive_name("a.jar"));
        assert!(is_nested_archive_name("packs/b.zip"));
        assert!(!is_nested_archive_name("notes.txt"));
        assert!(!is_nested_archive_name("folder.zip/"));
        assert!(!is_nested_archive_name("A.JAR"));
    }
}
