use mcci_cli::test_utils::ArchiveFixture;
use std::fs;

use crate::common::TestEnv;

#[test]
fn test_install_mod_into_selected_profile() {
    let env = TestEnv::new();
    let game_dir = env.with_selected_profile("Modded");
    let jar = ArchiveFixture::forge_mod().write_to(&env.root().join("downloads/foo.jar"));

    env.run_mcci(&["install", jar.to_str().unwrap()])
        .assert_success()
        .assert_stdout_contains("Installing into Modded")
        .assert_stdout_contains("Detecting content type")
        .assert_stdout_contains("Done!");

    assert_eq!(fs::read(game_dir.join("mods/foo.jar")).unwrap(), fs::read(&jar).unwrap());
}

#[test]
fn test_install_world_and_pack_with_game_dir() {
    let env = TestEnv::new();
    let game_dir = env.root().join("standalone");
    let world = ArchiveFixture::custom_map().write_to(&env.root().join("World1.zip"));
    let pack = ArchiveFixture::resource_pack().write_to(&env.root().join("Faithful.zip"));

    env.run_mcci(&[
        "install",
        world.to_str().unwrap(),
        pack.to_str().unwrap(),
        "--game-dir",
        game_dir.to_str().unwrap(),
    ])
    .assert_success();

    assert!(game_dir.join("saves/World1/level.dat").is_file());
    assert!(game_dir.join("saves/World1/region/r.0.0.mca").is_file());
    assert!(game_dir.join("resourcepacks/Faithful.zip").is_file());
}

#[test]
fn test_install_collection_with_copy() {
    let env = TestEnv::new();
    let game_dir = env.with_selected_profile("Modded");
    let bundle = ArchiveFixture::new()
        .nested("a.jar", ArchiveFixture::forge_mod())
        .nested("Faithful.zip", ArchiveFixture::resource_pack())
        .file("notes.txt", "read me")
        .write_to(&env.root().join("bundle.zip"));

    env.run_mcci(&["install", "--copy", bundle.to_str().unwrap()])
        .assert_success()
        .assert_stdout_contains("copied");

    assert!(game_dir.join("mods/a.jar").is_file());
    assert!(game_dir.join("resourcepacks/Faithful.zip").is_file());
    assert!(!game_dir.join("notes.txt").exists());
}

#[test]
fn test_install_into_named_profile() {
    let env = TestEnv::new();
    let vanilla = env.root().join("games/vanilla");
    let modded = env.root().join("games/modded");
    mcci_cli::test_utils::write_launcher_profiles(
        &env.profiles_path(),
        &[("v", "Vanilla", Some(vanilla.as_path())), ("m", "Modded", Some(modded.as_path()))],
        Some("Vanilla"),
    );
    let jar = ArchiveFixture::forge_mod().write_to(&env.root().join("foo.jar"));

    env.run_mcci(&["install", "--profile", "modded", jar.to_str().unwrap()]).assert_success();

    assert!(modded.join("mods/foo.jar").is_file());
    assert!(!vanilla.join("mods").exists());
}

#[test]
fn test_install_unknown_profile_fails() {
    let env = TestEnv::new();
    env.with_selected_profile("Modded");
    let jar = ArchiveFixture::forge_mod().write_to(&env.root().join("foo.jar"));

    env.run_mcci(&["install", "--profile", "Nope", jar.to_str().unwrap()])
        .assert_failure()
        .assert_stderr_contains("Profile 'Nope' not found");
}

#[test]
fn test_install_without_selection_fails() {
    let env = TestEnv::new();
    let jar = ArchiveFixture::forge_mod().write_to(&env.root().join("foo.jar"));

    env.run_mcci(&["install", jar.to_str().unwrap()])
        .assert_failure()
        .assert_stderr_contains("No profile is selected");
}

#[test]
fn test_install_unrecognised_file_leaves_profile_untouched() {
    let env = TestEnv::new();
    let game_dir = env.with_selected_profile("Modded");
    let notes = env.root().join("notes.txt");
    fs::write(&notes, "plain text").unwrap();

    env.run_mcci(&["install", notes.to_str().unwrap()])
        .assert_failure()
        .assert_stderr_contains("wasn't a recognized content type");
    assert!(!game_dir.exists());
}

#[test]
fn test_install_missing_file_fails() {
    let env = TestEnv::new();
    env.with_selected_profile("Modded");
    let missing = env.root().join("missing.jar");

    env.run_mcci(&["install", missing.to_str().unwrap()])
        .assert_failure()
        .assert_stderr_contains("File not found");
}

#[test]
fn test_quiet_install_prints_nothing() {
    let env = TestEnv::new();
    let game_dir = env.with_selected_profile("Modded");
    let jar = ArchiveFixture::forge_mod().write_to(&env.root().join("foo.jar"));

    let output = env.run_mcci(&["--quiet", "install", jar.to_str().unwrap()]);
    output.assert_success();
    assert!(output.stdout.is_empty(), "unexpected stdout: {}", output.stdout);
    assert!(game_dir.join("mods/foo.jar").is_file());
}
