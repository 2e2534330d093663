//! Install content files into a profile.
//!
//! The target is, in order of preference, the `--game-dir` directory, the
//! `--profile` launcher profile, or the launcher's selected profile. Files are
//! installed one after another; the first failure stops the command.

use super::CliConfig;
use crate::config::GlobalConfig;
use crate::core::McciError;
use crate::installer::{InstallLog, InstallSummary, Installer, LinkMode};
use crate::profile::Profile;
use crate::utils::platform::resolve_path;
use crate::utils::progress::ConsoleProgress;
use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Command to install content files.
#[derive(Args, Debug)]
pub struct InstallCommand {
    /// Content files to install (mods, resource packs, maps or bundles)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Launcher profile to install into (default: the selected profile)
    #[arg(short, long, conflicts_with = "game_dir")]
    profile: Option<String>,

    /// Game directory to install into, bypassing launcher profiles
    #[arg(short, long)]
    game_dir: Option<String>,

    /// Always copy instead of hard linking
    #[arg(long)]
    copy: bool,
}

impl InstallCommand {
    /// Execute the install command.
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let config = cli.load_global().await?;
        let profile = self.target_profile(cli, &config).await?;

        let link_mode = if self.copy {
            LinkMode::Copy
        } else {
            config.link_mode
        };
        let installer = Installer::new(config.detector(), link_mode);

        if !cli.quiet {
            println!(
                "Installing into {} ({})",
                profile.name().bold(),
                profile.game_dir().display()
            );
        }

        let progress = ConsoleProgress::new(!cli.no_progress && !cli.quiet);
        let result = self.install_all(installer, &profile, &progress, cli.quiet).await;
        progress.finish_and_clear();
        result
    }

    async fn target_profile(
        &self,
        cli: &CliConfig,
        config: &GlobalConfig,
    ) -> Result<Profile> {
        if let Some(dir) = &self.game_dir {
            let game_dir = resolve_path(dir)?;
            return Ok(Profile::new(game_dir.display().to_string(), &game_dir)?);
        }

        let store = cli.load_profiles(config).await?;
        let profile = match &self.profile {
            Some(name) => {
                store.get(name).ok_or_else(|| McciError::ProfileNotFound {
                    name: name.clone(),
                })?
            }
            None => store.selected()?,
        };
        Ok(profile.clone())
    }

    async fn install_all(
        &self,
        installer: Installer,
        profile: &Profile,
        progress: &ConsoleProgress,
        quiet: bool,
    ) -> Result<()> {
        for file in &self.files {
            if !file.exists() {
                bail!("File not found: {}", file.display());
            }

            progress.set_message(format!("Installing {}", file.display()));

            let source = file.clone();
            let target = profile.clone();
            let mut sink = (!quiet).then(|| progress.clone());
            let summary = tokio::task::spawn_blocking(move || {
                let mut log = match sink.as_mut() {
                    Some(sink) => InstallLog::new(sink),
                    None => InstallLog::silent(),
                };
                installer.install_path(&source, &target, &mut log)
            })
            .await
            .context("Install task panicked")??;

            if !quiet {
                print_summary(&summary);
            }
        }
        Ok(())
    }
}

fn print_summary(summary: &InstallSummary) {
    for item in &summary.installed {
        println!(
            "{} {} {} ({})",
            "✓".green(),
            item.kind,
            item.destination.display(),
            item.placement
        );
    }
    for skipped in &summary.skipped {
        println!("{} Skipped {}: {}", "-".yellow(), skipped.entry, skipped.reason);
    }
}
