//! Core types for MCCI
//!
//! This module holds the foundation every other module builds on:
//!
//! - [`error`] - [`McciError`], [`ErrorContext`] and [`user_friendly_error`]
//! - `content` - the closed content model: [`ContentKind`] and [`Content`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcci_cli::core::{ContentKind, McciError, user_friendly_error};
//!
//! assert_eq!(ContentKind::ForgeMod.dest_subdir(), "mods");
//!
//! let ctx = user_friendly_error(McciError::NoProfileSelected.into());
//! ctx.display();
//! ```

mod content;
pub mod error;

pub use content::{Content, ContentKind};
pub use error::{ErrorContext, McciError, user_friendly_error};
