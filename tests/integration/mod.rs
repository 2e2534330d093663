//! Integration test suite for MCCI
//!
//! End-to-end tests that run the `mcci` binary against an isolated launcher
//! directory and global config.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: argument handling and help output
//! - **config**: `mcci config show` and `mcci config init`
//! - **detect**: content classification
//! - **install**: installing mods, packs, maps and collections
//! - **profiles**: launcher profile management

#[path = "../common/mod.rs"]
mod common;

mod cli;
mod config;
mod detect;
mod install;
mod profiles;
