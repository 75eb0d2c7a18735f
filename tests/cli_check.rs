//! `tcwatch check` against a stub checker

#![cfg(unix)]

mod common;

use common::TestEnv;

fn stub_args(env: &TestEnv, exit_code: i32) -> Vec<String> {
    let stub = env.stub_checker(exit_code);
    vec![
        "--cmd".to_string(),
        stub.display().to_string(),
        "--notification".to_string(),
        "never".to_string(),
    ]
}

fn run_check(env: &TestEnv, extra: &[&str], exit_code: i32) -> common::TestResult {
    let stub = stub_args(env, exit_code);
    let mut args = vec!["check"];
    args.extend(extra);
    args.extend(stub.iter().map(String::as_str));
    env.run(&args)
}

#[test]
fn test_check_project_passes() {
    let env = TestEnv::new();

    let result = run_check(&env, &[], 0);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("stub checker ran"));
    assert_eq!(env.recorded_argv(), vec!["tc", "--color", "always", "--dir", "."]);
}

#[test]
fn test_check_failure_exits_one() {
    let env = TestEnv::new();

    let result = run_check(&env, &[], 1);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stdout.contains("stub checker ran"));
}

#[test]
fn test_check_paths_run_incrementally() {
    let env = TestEnv::new();
    env.write_project_file("app/user.rb", "# typed: true\n");
    env.write_project_file("lib/util.rb", "# typed: true\n");

    let result = run_check(&env, &["app/user.rb", "lib", "lib/util.rb", "gone.rb"], 0);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    let argv = env.recorded_argv();
    assert_eq!(&argv[..5], &["tc", "--color", "always", "--dir", "sorbet"]);
    // lib/util.rb is covered by lib, gone.rb does not exist
    assert_eq!(argv.len(), 7, "unexpected argv: {argv:?}");
    assert!(argv[5].ends_with("app/user.rb"));
    assert!(argv[6].ends_with("lib"));
}

#[test]
fn test_check_missing_paths_skip_the_checker() {
    let env = TestEnv::new();

    let result = run_check(&env, &["missing.rb"], 1);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("Nothing to check"));
    assert!(env.recorded_argv().is_empty());
}

#[test]
fn test_check_missing_binary_is_failed_run() {
    let env = TestEnv::new();
    let missing = env.bin_dir.path().join("no-such-checker");

    let result = env.run(&[
        "check",
        "--cmd",
        &missing.display().to_string(),
        "--notification",
        "never",
    ]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
}

#[test]
fn test_check_unbalanced_extra_args_is_configuration_error() {
    let env = TestEnv::new();

    let result = run_check(&env, &["--cli", "'unbalanced"], 0);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(env.recorded_argv().is_empty());
}

#[test]
fn test_check_extra_args_and_flags() {
    let env = TestEnv::new();

    let result = run_check(
        &env,
        &["--no-config", "--no-colorize", "--cli", "--suppress-non-critical 'a b'"],
        0,
    );

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert_eq!(
        env.recorded_argv(),
        vec!["tc", "--no-config", "--dir", ".", "--suppress-non-critical", "a b"]
    );
}

#[test]
fn test_check_hide_output() {
    let env = TestEnv::new();

    let result = run_check(&env, &["--hide-output"], 0);

    assert_eq!(result.exit_code, 0);
    assert!(!result.stdout.contains("stub checker ran"));
}

#[test]
fn test_check_reads_project_config() {
    let env = TestEnv::new();
    env.write_project_file(".tcwatch.toml", "[run]\ncolorize = \"never\"\n");

    let result = run_check(&env, &[], 0);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert_eq!(env.recorded_argv(), vec!["tc", "--color", "never", "--dir", "."]);
}

#[test]
fn test_check_json_emits_ndjson_events() {
    let env = TestEnv::new();

    let result = run_check(&env, &["--json"], 1);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());

    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("every stdout line is JSON"))
        .collect();

    assert_eq!(events.len(), 2, "stdout:\n{}", result.stdout);
    assert_eq!(events[0]["event"], "check_started");
    assert_eq!(events[0]["command"], "check");
    assert_eq!(events[0]["full_project"], true);
    assert_eq!(events[1]["event"], "check_finished");
    assert_eq!(events[1]["passed"], false);
    assert_eq!(events[1]["exit_code"], 1);
    assert!(events[1]["output"]
        .as_str()
        .unwrap()
        .contains("stub checker ran"));
}

#[test]
fn test_check_json_configuration_error_event() {
    let env = TestEnv::new();

    let result = run_check(&env, &["--json", "--cli", "\"open"], 0);

    assert_eq!(result.exit_code, 2);
    let line = result.stdout.lines().last().unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["event"], "error");
}
