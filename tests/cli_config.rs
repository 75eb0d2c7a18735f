//! `tcwatch config` output and configuration errors

mod common;

use common::TestEnv;

fn config_json(env: &TestEnv) -> serde_json::Value {
    let result = env.run(&["config", "--json"]);
    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    serde_json::from_str(result.stdout.trim()).expect("config --json prints one JSON object")
}

#[test]
fn test_config_defaults() {
    let env = TestEnv::new();

    let json = config_json(&env);

    assert_eq!(json["event"], "config");
    assert_eq!(json["command"], "config");
    assert!(json["source"].is_null());
    assert_eq!(json["run"]["colorize"], "always");
    assert_eq!(json["run"]["notification"], "on_failure");
    assert_eq!(json["run"]["all_on_start"], true);
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_config_project_file_wins_over_user_file() {
    let env = TestEnv::new();
    std::fs::write(
        env.config_home.path().join("config.toml"),
        "[run]\ncommand = \"user-srb\"\n",
    )
    .unwrap();
    env.write_project_file(".tcwatch.toml", "[run]\ncommand = \"bin/srb\"\n");

    let json = config_json(&env);

    assert_eq!(json["run"]["command"], "bin/srb");
    assert!(json["source"].as_str().unwrap().ends_with(".tcwatch.toml"));
}

#[test]
fn test_config_user_file_used_without_project_file() {
    let env = TestEnv::new();
    std::fs::write(
        env.config_home.path().join("config.toml"),
        "[run]\nhide_output = true\n",
    )
    .unwrap();

    let json = config_json(&env);

    assert_eq!(json["run"]["hide_output"], true);
    assert!(json["source"].as_str().unwrap().ends_with("config.toml"));
}

#[test]
fn test_config_unknown_key_warning() {
    let env = TestEnv::new();
    env.write_project_file(".tcwatch.toml", "[run]\nnotifcation = \"always\"\n");

    let json = config_json(&env);
    let warnings = json["warnings"].as_array().unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["key"], "notifcation");
    assert_eq!(warnings[0]["suggestion"], "notification");
    assert_eq!(json["run"]["notification"], "on_failure");

    let text = env.run(&["config"]);
    assert_eq!(text.exit_code, 0);
    assert!(text.stdout.contains("Unknown config key 'notifcation'"));
}

#[test]
fn test_config_explicit_missing_file_exits_two() {
    let env = TestEnv::new();

    let result = env.run(&["config", "--config", "does-not-exist.toml"]);

    assert_eq!(result.exit_code, 2);
    assert!(!result.stderr.is_empty());
}

#[test]
fn test_config_invalid_toml_exits_two() {
    let env = TestEnv::new();
    env.write_project_file(".tcwatch.toml", "[run\n");

    let result = env.run(&["config"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains(".tcwatch.toml"));
}
