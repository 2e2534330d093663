use crate::common::TestEnv;

#[test]
fn test_list_marks_selected_profile() {
    let env = TestEnv::new();
    env.with_selected_profile("Modded");

    env.run_mcci(&["profile", "list"]).assert_success().assert_stdout_contains("* Modded");
}

#[test]
fn test_list_without_profiles_file() {
    let env = TestEnv::new();

    env.run_mcci(&["profile"]).assert_success().assert_stdout_contains("No profiles in");
}

#[test]
fn test_new_and_select_profile_round_trip() {
    let env = TestEnv::new();
    env.with_selected_profile("Vanilla");
    let game_dir = env.root().join("games/skyblock");

    env.run_mcci(&["profile", "new", "Skyblock", game_dir.to_str().unwrap()])
        .assert_success()
        .assert_stdout_contains("Created profile");

    env.run_mcci(&["profile", "select", "skyblock"])
        .assert_success()
        .assert_stdout_contains("Selected profile");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.profiles_path()).unwrap()).unwrap();
    assert_eq!(json["selectedProfile"], "Skyblock");
    assert_eq!(json["profiles"]["Skyblock"]["name"], "Skyblock");
    assert_eq!(json["profiles"]["Vanilla"]["name"], "Vanilla");

    env.run_mcci(&["profile", "show"])
        .assert_success()
        .assert_stdout_contains("Skyblock")
        .assert_stdout_contains("Selected: yes");
}

#[test]
fn test_select_unknown_profile_fails() {
    let env = TestEnv::new();
    env.with_selected_profile("Vanilla");
    let before = std::fs::read_to_string(env.profiles_path()).unwrap();

    env.run_mcci(&["profile", "select", "Nope"])
        .assert_failure()
        .assert_stderr_contains("Profile 'Nope' not found");

    assert_eq!(std::fs::read_to_string(env.profiles_path()).unwrap(), before);
}

#[test]
fn test_malformed_profiles_file_is_not_overwritten() {
    let env = TestEnv::new();
    std::fs::write(env.profiles_path(), "{ not json").unwrap();

    env.run_mcci(&["profile", "new", "Broken", env.root().to_str().unwrap()]).assert_failure();

    assert_eq!(std::fs::read_to_string(env.profiles_path()).unwrap(), "{ not json");
}

#[test]
fn test_new_select_updates_existing_profile() {
    let env = TestEnv::new();
    mcci_cli::test_utils::write_launcher_profiles(
        &env.profiles_path(),
        &[("v", "Vanilla", None), ("m", "Modded", Some(env.root().join("old").as_path()))],
        Some("Vanilla"),
    );
    let new_dir = env.root().join("new");

    env.run_mcci(&["profile", "new", "Modded", new_dir.to_str().unwrap(), "--select"])
        .assert_success()
        .assert_stdout_contains("Updated profile");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.profiles_path()).unwrap()).unwrap();
    assert_eq!(json["selectedProfile"], "Modded");
    assert_eq!(json["profiles"]["m"]["gameDir"], new_dir.to_str().unwrap());
    assert!(json["profiles"].get("Modded").is_none());
}
