//! Launcher profile management.
//!
//! Changes are written to `launcher_profiles.json` as soon as the command
//! succeeds.

use super::CliConfig;
use crate::core::McciError;
use crate::profile::{Profile, ProfileStore};
use crate::utils::platform::resolve_path;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

/// Command to manage launcher profiles.
#[derive(Args, Debug)]
pub struct ProfileCommand {
    /// Profile operation to perform
    #[command(subcommand)]
    command: Option<ProfileSubcommands>,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommands {
    /// List all profiles, marking the selected one.
    ///
    /// This is the default when no subcommand is given.
    List,

    /// Show one profile (default: the selected profile)
    Show {
        /// Profile name, matched case-insensitively
        name: Option<String>,
    },

    /// Create a profile, or update the game directory of an existing one
    New {
        /// Profile name
        name: String,

        /// Game directory content is installed into
        game_dir: String,

        /// Also make it the selected profile
        #[arg(long)]
        select: bool,
    },

    /// Select the profile used by `mcci install`
    Select {
        /// Profile name, matched case-insensitively
        name: String,
    },
}

impl ProfileCommand {
    /// Execute the profile command.
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let config = cli.load_global().await?;
        let mut store = cli.load_profiles(&config).await?;

        match self.command {
            Some(ProfileSubcommands::List) | None => {
                list(&store);
                Ok(())
            }
            Some(ProfileSubcommands::Show {
                name,
            }) => show(&store, name.as_deref()),
            Some(ProfileSubcommands::New {
                name,
                game_dir,
                select,
            }) => {
                let profile = Profile::new(name, resolve_path(&game_dir)?)?;
                let existed = store.get(profile.name()).is_some();
                let name = profile.name().to_string();
                let label = profile.to_string();
                store.add(profile);
                if select {
                    store.select(&name)?;
                }
                store.save().await?;

                let verb = if existed {
                    "Updated"
                } else {
                    "Created"
                };
                println!("✅ {verb} profile {label}");
                if select {
                    println!("   Selected it for installs");
                }
                Ok(())
            }
            Some(ProfileSubcommands::Select {
                name,
            }) => {
                store.select(&name)?;
                store.save().await?;
                println!("✅ Selected profile '{}'", store.selected()?.name().bold());
                Ok(())
            }
        }
    }
}

fn list(store: &ProfileStore) {
    if store.profiles().is_empty() {
        println!("No profiles in {}", store.path().display());
        println!("\n{}", "Tip:".yellow());
        println!("  Run 'mcci profile new <NAME> <GAME_DIR>' to create one");
        return;
    }

    let selected = store.selected().ok();
    for profile in store.profiles() {
        let is_selected = selected.is_some_and(|s| s == profile);
        let marker = if is_selected {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        println!("{marker} {} {}", profile.name().bold(), profile.game_dir().display());
    }
}

fn show(store: &ProfileStore, name: Option<&str>) -> Result<()> {
    let profile = match name {
        Some(name) => store.get(name).ok_or_else(|| McciError::ProfileNotFound {
            name: name.to_string(),
        })?,
        None => store.selected()?,
    };
    let is_selected = store.selected().is_ok_and(|s| s == profile);

    println!("{}", profile.name().bold());
    println!("  Game directory: {}", profile.game_dir().display());
    println!("  Selected: {}", if is_selected { "yes" } else { "no" });
    Ok(())
}
