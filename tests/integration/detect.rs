use mcci_cli::test_utils::ArchiveFixture;

use crate::common::TestEnv;

#[test]
fn test_detect_each_kind() {
    let env = TestEnv::new();
    let jar = ArchiveFixture::forge_mod().write_to(&env.root().join("foo.jar"));
    let pack = ArchiveFixture::resource_pack().write_to(&env.root().join("Faithful.zip"));
    let world = ArchiveFixture::custom_map().write_to(&env.root().join("World1.zip"));
    let bundle = ArchiveFixture::new()
        .nested("a.jar", ArchiveFixture::forge_mod())
        .write_to(&env.root().join("bundle.zip"));

    let output = env.run_mcci(&[
        "detect",
        jar.to_str().unwrap(),
        pack.to_str().unwrap(),
        world.to_str().unwrap(),
        bundle.to_str().unwrap(),
    ]);

    output
        .assert_success()
        .assert_stdout_contains("foo.jar: Forge mod (-> mods)")
        .assert_stdout_contains("Faithful.zip: resource pack (-> resourcepacks)")
        .assert_stdout_contains("World1.zip: custom map (-> saves)")
        .assert_stdout_contains("bundle.zip: content collection (-> .)");
}

#[test]
fn test_detect_unrecognised_file_fails() {
    let env = TestEnv::new();
    let notes = env.root().join("notes.txt");
    std::fs::write(&notes, "plain text").unwrap();

    env.run_mcci(&["detect", notes.to_str().unwrap()])
        .assert_failure()
        .assert_stderr_contains("wasn't a recognized content type");
}

#[test]
fn test_detect_respects_configured_depth() {
    let env = TestEnv::new();
    let dir = toml::Value::String(env.launcher_dir().to_string_lossy().into_owned());
    std::fs::write(env.config_path(), format!("minecraft_dir = {dir}\nmax_nesting_depth = 0\n"))
        .unwrap();
    let bundle = ArchiveFixture::new()
        .nested("a.jar", ArchiveFixture::forge_mod())
        .write_to(&env.root().join("bundle.zip"));

    env.run_mcci(&["detect", bundle.to_str().unwrap()]).assert_failure();
}
