//! Shared helpers for the integration suite.

#![allow(dead_code)]

use assert_cmd::Command;
use mcci_cli::test_utils::{init_test_logging, write_launcher_profiles};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated MCCI environment: a launcher directory, its profile list and a
/// global config pointing at it, all inside one temp directory.
pub struct TestEnv {
    _temp: TempDir,
    root: PathBuf,
    launcher_dir: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates the environment with an empty launcher directory.
    pub fn new() -> Self {
        init_test_logging(None);
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        let launcher_dir = root.join("launcher");
        std::fs::create_dir_all(&launcher_dir).unwrap();

        let config_path = root.join("config.toml");
        let dir = toml::Value::String(launcher_dir.to_string_lossy().into_owned());
        std::fs::write(&config_path, format!("minecraft_dir = {dir}\n")).unwrap();

        Self {
            _temp: temp,
            root,
            launcher_dir,
            config_path,
        }
    }

    /// Temp root for downloads and game directories.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn launcher_dir(&self) -> &Path {
        &self.launcher_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.launcher_dir.join("launcher_profiles.json")
    }

    /// Seeds `launcher_profiles.json` with one selected profile and returns its game dir.
    pub fn with_selected_profile(&self, name: &str) -> PathBuf {
        let game_dir = self.root.join("games").join(name);
        write_launcher_profiles(
            &self.profiles_path(),
            &[(name, name, Some(game_dir.as_path()))],
            Some(name),
        );
        game_dir
    }

    /// Runs `mcci` with this environment's config and profile list.
    pub fn run_mcci(&self, args: &[&str]) -> CommandOutput {
        let output = Command::cargo_bin("mcci")
            .unwrap()
            .args(args)
            .arg("--config")
            .arg(&self.config_path)
            .arg("--profiles")
            .arg(self.profiles_path())
            .arg("--no-progress")
            .env("NO_COLOR", "1")
            .env("MCCI_NO_PROGRESS", "1")
            .env_remove("RUST_LOG")
            .env_remove("MCCI_CONFIG_PATH")
            .output()
            .unwrap();

        CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStderr: {}",
            self.code, self.stderr
        );
        self
    }

    /// Assert the command failed
    pub fn assert_failure(&self) -> &Self {
        assert!(!self.success, "Command unexpectedly succeeded\nStdout: {}", self.stdout);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
