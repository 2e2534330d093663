//! Global configuration management commands.
//!
//! # Examples
//!
//! ```bash
//! mcci config               # Same as `mcci config show`
//! mcci config init          # Write a commented starter file
//! mcci config init --force  # Overwrite an existing file
//! ```

use super::CliConfig;
use crate::config::GlobalConfig;
use crate::installer::LinkMode;
use crate::utils::fs::safe_write;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

/// Command to manage the global configuration.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Configuration operation to perform
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    /// Write a starter configuration file.
    ///
    /// Refuses to overwrite an existing file unless `--force` is given.
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration (the default)
    Show,
}

impl ConfigCommand {
    /// Execute the config command.
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        match self.command {
            Some(ConfigSubcommands::Init {
                force,
            }) => init(cli, force).await,
            Some(ConfigSubcommands::Show) | None => show(cli).await,
        }
    }
}

async fn init(cli: &CliConfig, force: bool) -> Result<()> {
    let config_path = cli.global_config_path()?;

    if config_path.exists() && !force {
        println!("❌ Global config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let content = GlobalConfig::init_example();
    let target = config_path.clone();
    let written = content.clone();
    tokio::task::spawn_blocking(move || safe_write(&target, &written))
        .await
        .context("Config write task panicked")??;

    println!("✅ Created global config at: {}", config_path.display());
    println!("\n{}", "Example configuration:".bold());
    println!("{content}");
    Ok(())
}

async fn show(cli: &CliConfig) -> Result<()> {
    let config_path = cli.global_config_path()?;
    let config = cli.load_global().await?;

    println!("{}", "Global Configuration".bold());
    if config_path.exists() {
        println!("Location: {}\n", config_path.display());
    } else {
        println!("Location: {} (not created, using defaults)\n", config_path.display());
    }

    println!("minecraft_dir = {}", config.minecraft_dir()?.display());
    let link_mode = match config.link_mode {
        LinkMode::Auto => "auto",
        LinkMode::Copy => "copy",
    };
    println!("link_mode = {link_mode}");
    println!("max_nesting_depth = {}", config.max_nesting_depth);
    Ok(())
}
