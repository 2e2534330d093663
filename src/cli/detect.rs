//! Report the content kind of files.

use super::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Command to detect content kinds without installing anything.
#[derive(Args, Debug)]
pub struct DetectCommand {
    /// Files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl DetectCommand {
    /// Prints `<file>: <kind> (-> <subdir>)` per file; stops at the first
    /// unrecognised file.
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let detector = cli.load_global().await?.detector();

        for file in self.files {
            let source = file.clone();
            let content = tokio::task::spawn_blocking(move || detector.detect(&source))
                .await
                .context("Detection task panicked")??;

            println!(
                "{}: {} (-> {})",
                file.display(),
                content.kind().to_string().green(),
                content.dest_subdir()
            );
        }
        Ok(())
    }
}
