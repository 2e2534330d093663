//! Progress output for install operations
//!
//! The install pipeline reports what it does as plain text lines through a
//! [`ProgressSink`]. Library callers can collect those lines in a `String` or a
//! `Vec<String>`; the CLI uses [`ConsoleProgress`], which prints each line
//! above an `indicatif` spinner.
//!
//! # Environment Variables
//!
//! - `MCCI_NO_PROGRESS`: Set to any value to disable the spinner. Lines are
//!   still printed.
//!
//! # Examples
//!
//! ```rust
//! use mcci_cli::utils::progress::ProgressSink;
//!
//! let mut log = Vec::<String>::new();
//! log.append_line("Linking foo.jar to mods/foo.jar");
//! assert_eq!(log.len(), 1);
//! ```

use crate::constants::NO_PROGRESS_ENV;
use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

/// An append-only sink for human-readable progress lines.
pub trait ProgressSink {
    /// Appends one line; `line` carries no trailing newline.
    fn append_line(&mut self, line: &str);
}

impl ProgressSink for String {
    fn append_line(&mut self, line: &str) {
        self.push_str(line);
        self.push('\n');
    }
}

impl ProgressSink for Vec<String> {
    fn append_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Checks if spinners should be disabled through the environment.
fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some()
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{prefix:.bold} {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}

/// Console sink: prints progress lines to stdout above a spinner.
///
/// When the spinner is disabled (by `--no-progress` or `MCCI_NO_PROGRESS`),
/// lines go straight to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleProgress {
    spinner: Option<IndicatifBar>,
}

impl ConsoleProgress {
    /// Creates a console sink; `show_spinner` is ANDed with the environment check.
    #[must_use]
    pub fn new(show_spinner: bool) -> Self {
        let spinner = (show_spinner && !is_progress_disabled()).then(|| {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self {
            spinner,
        }
    }

    /// Sets the message shown next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        if let Some(bar) = &self.spinner {
            bar.set_message(msg.into());
        }
    }

    /// Removes the spinner from the terminal.
    pub fn finish_and_clear(&self) {
        if let Some(bar) = &self.spinner {
            bar.finish_and_clear();
        }
    }

    /// Returns true if a spinner is being drawn.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        self.spinner.is_some()
    }
}

impl ProgressSink for ConsoleProgress {
    fn append_line(&mut self, line: &str) {
        match &self.spinner {
            Some(bar) => bar.println(line),
            None => println!("{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_appends_lines() {
        let mut log = String::new();
        log.append_line("Detecting content type");
        log.append_line("Done!");
        assert_eq!(log, "Detecting content type\nDone!\n");
    }

    #[test]
    fn test_vec_sink_appends_lines() {
        let mut log: Vec<String> = Vec::new();
        log.append_line("Linking a to b");
        assert_eq!(log, vec!["Linking a to b".to_string()]);
    }

    #[test]
    fn test_console_without_spinner() {
        let mut console = ConsoleProgress::new(false);
        assert!(!console.is_animated());
        console.set_message("ignored");
        console.append_line("plain line");
        console.finish_and_clear();
    }

    #[test]
    #[serial_test::serial]
    fn test_env_disables_spinner() {
        unsafe {
            std::env::set_var(NO_PROGRESS_ENV, "1");
        }
        let console = ConsoleProgress::new(true);
        unsafe {
            std::env::remove_var(NO_PROGRESS_ENV);
        }

        assert!(!console.is_animated());
    }
}
