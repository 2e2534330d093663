//! Error handling for MCCI
//!
//! This module provides the error types and user-facing error reporting for the
//! content installer. The error system follows two rules:
//! 1. **Strongly-typed errors** for precise handling inside the pipeline
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`McciError`] - Enumerated failure cases of MCCI
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! # Error Categories
//!
//! - **Classification**: [`McciError::UnsupportedContentType`] is the only
//!   classification failure a user ever sees.
//! - **Installation**: [`McciError::IoFailure`] names the step and path that failed.
//! - **Profiles**: [`McciError::ProfileNotFound`], [`McciError::NoProfileSelected`],
//!   [`McciError::InvalidProfile`], [`McciError::ProfilesParseError`].
//! - **Configuration**: [`McciError::ConfigError`].
//!
//! A validity test deciding that a file is simply *not* a given content kind is
//! not an error at all; probes report that as a plain `false`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcci_cli::core::{McciError, user_friendly_error};
//! use std::path::PathBuf;
//!
//! let error = McciError::UnsupportedContentType {
//!     path: PathBuf::from("/tmp/notes.txt"),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for MCCI operations
///
/// Variants carry the path and operation that failed so that a single error
/// is enough to explain what went wrong to the user.
#[derive(Error, Debug)]
pub enum McciError {
    /// No registered content kind recognised the file
    ///
    /// Raised only by the detector after every kind's validity test returned
    /// `false`. Never retried.
    #[error("The file {} wasn't a recognized content type", path.display())]
    UnsupportedContentType {
        /// Absolute path of the offending file
        path: PathBuf,
    },

    /// A filesystem or archive step of an installation failed
    ///
    /// # Fields
    /// - `operation`: the step that failed (e.g. "create directory", "copy file")
    /// - `path`: the destination or archive path the step was working on
    /// - `source`: the underlying I/O error
    #[error("Failed to {operation}: {}", path.display())]
    IoFailure {
        /// The step that failed
        operation: String,
        /// Path the step was working on
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Named profile does not exist in the profile store
    #[error("Profile '{name}' not found")]
    ProfileNotFound {
        /// Name that was looked up
        name: String,
    },

    /// The profile store has no selected profile
    #[error("No profile is selected")]
    NoProfileSelected,

    /// Profile data violates an invariant (e.g. empty name)
    #[error("Invalid profile: {reason}")]
    InvalidProfile {
        /// Why the profile was rejected
        reason: String,
    },

    /// The launcher profile list could not be parsed
    #[error("Invalid launcher profiles file {file}")]
    ProfilesParseError {
        /// Path to the profiles file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl McciError {
    /// Build an [`McciError::IoFailure`] for `operation` on `path`.
    pub fn io_failure(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::IoFailure {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

impl Clone for McciError {
    fn clone(&self) -> Self {
        match self {
            Self::UnsupportedContentType {
                path,
            } => Self::UnsupportedContentType {
                path: path.clone(),
            },
            Self::IoFailure {
                operation,
                path,
                source,
            } => Self::IoFailure {
                operation: operation.clone(),
                path: path.clone(),
                source: io::Error::new(source.kind(), source.to_string()),
            },
            Self::ProfileNotFound {
                name,
            } => Self::ProfileNotFound {
                name: name.clone(),
            },
            Self::NoProfileSelected => Self::NoProfileSelected,
            Self::InvalidProfile {
                reason,
            } => Self::InvalidProfile {
                reason: reason.clone(),
            },
            Self::ProfilesParseError {
                file,
                reason,
            } => Self::ProfilesParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // io::Error does not implement Clone, keep kind and message
            Self::IoError(e) => Self::IoError(io::Error::new(e.kind(), e.to_string())),
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use mcci_cli::core::{McciError, ErrorContext};
///
/// let context = ErrorContext::new(McciError::NoProfileSelected)
///     .with_suggestion("Select one with 'mcci profile select <NAME>'")
///     .with_details("The launcher profile list has no selectedProfile entry");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying MCCI error
    pub error: McciError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: McciError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognises [`McciError`] anywhere in the `anyhow` chain, bare
/// [`std::io::Error`]s and JSON/TOML parse errors. Anything else is reported
/// with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(mcci_error) = error.chain().find_map(|e| e.downcast_ref::<McciError>()) {
        return create_error_context(mcci_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<io::Error>() {
        match io_error.kind() {
            io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(McciError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check ownership and permissions of the profile's game directory")
                .with_details("MCCI doesn't have permission to read or write a file it needs");
            }
            io::ErrorKind::NotFound => {
                return ErrorContext::new(McciError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if error.downcast_ref::<toml::de::Error>().is_some() {
        return ErrorContext::new(McciError::ConfigError {
            message: error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your MCCI config file (see 'mcci config show')");
    }

    // Generic error - include the full error chain
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(McciError::Other {
        message,
    })
}

/// Map each [`McciError`] variant to a context with tailored suggestions.
fn create_error_context(error: McciError) -> ErrorContext {
    match &error {
        McciError::UnsupportedContentType { path } => {
            let details = format!(
                "{} is not a zip/jar containing mcmod.info, pack.mcmeta or level.dat at its top level, \
                 nor an archive bundling such files",
                path.display()
            );
            ErrorContext::new(error)
                .with_suggestion("Only Forge mods, resource packs, saved worlds and archives of those can be installed")
                .with_details(details)
        }

        McciError::IoFailure { source, .. } => {
            let details = source.to_string();
            let suggestion = match source.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Check permissions on the profile's game directory"
                }
                io::ErrorKind::NotFound => "Check that the source file still exists",
                _ => "Check free disk space and that the destination path is valid",
            };
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }

        McciError::ProfileNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("List available profiles with 'mcci profile list' or create one with 'mcci profile new'"),

        McciError::NoProfileSelected => ErrorContext::new(error)
            .with_suggestion("Select a profile with 'mcci profile select <NAME>' or pass --profile / --game-dir")
            .with_details("The launcher profile list has no selectedProfile entry"),

        McciError::ProfilesParseError { file, reason } => {
            let suggestion = format!("Fix or remove {file}; MCCI will not overwrite a file it cannot read");
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }

        _ => ErrorContext::new(error),
    }
}
