use crate::common::TestEnv;

#[test]
fn test_config_show_reports_effective_values() {
    let env = TestEnv::new();

    env.run_mcci(&["config"])
        .assert_success()
        .assert_stdout_contains(&env.launcher_dir().display().to_string())
        .assert_stdout_contains("max_nesting_depth = 8");
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let env = TestEnv::new();
    let before = std::fs::read_to_string(env.config_path()).unwrap();

    env.run_mcci(&["config", "init"])
        .assert_success()
        .assert_stdout_contains("already exists")
        .assert_stdout_contains("--force");

    assert_eq!(std::fs::read_to_string(env.config_path()).unwrap(), before);
}

#[test]
fn test_config_init_force_writes_example() {
    let env = TestEnv::new();

    env.run_mcci(&["config", "init", "--force"]).assert_success();

    let written = std::fs::read_to_string(env.config_path()).unwrap();
    assert!(written.contains("link_mode = \"auto\""));
    assert!(written.contains("max_nesting_depth = 8"));
}
