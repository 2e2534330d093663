//! Test utilities for MCCI
//!
//! Helpers shared by unit tests and the integration test suite:
//! - [`init_test_logging`] to see `tracing` output while debugging a test
//! - [`ArchiveFixture`] to build content archives on disk
//! - [`write_launcher_profiles`] to seed a launcher profile list
//!
//! # Example
//!
//! ```rust,no_run
//! use mcci_cli::test_utils::{ArchiveFixture, init_test_logging};
//! use std::path::Path;
//!
//! init_test_logging(None);
//! let jar = ArchiveFixture::forge_mod().write_to(Path::new("/tmp/foo.jar"));
//! ```

pub mod fixtures;

pub use fixtures::{ArchiveFixture, write_launcher_profiles};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=mcci_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
