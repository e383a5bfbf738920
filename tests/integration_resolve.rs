//! Integration tests for the `depres resolve` command.

use assert_cmd::Command;
use depres::test_utils::{TestEnvironment, fixtures};
use predicates::prelude::*;

/// `depres` isolated from any user configuration.
fn depres(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("depres").unwrap();
    cmd.current_dir(env.path())
        .env_remove("DEPRES_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", env.path());
    cmd
}

#[test]
fn test_resolve_basic() {
    let env = TestEnvironment::with_input(fixtures::BASIC).unwrap();

    depres(&env).args(["resolve", "deps.txt"]).assert().success().stdout(
        "A depends on B C E F G H \n\
         B depends on C E F G H \n\
         C depends on G \n\
         D depends on A B C E F G H \n\
         E depends on F H \n\
         F depends on H \n",
    );
}

#[test]
fn test_resolve_crlf_input() {
    let env = TestEnvironment::with_input("A depends on B\r\nB depends on C\r\n").unwrap();

    depres(&env)
        .args(["resolve", "deps.txt"])
        .assert()
        .success()
        .stdout("A depends on B C \nB depends on C \n");
}

#[test]
fn test_resolve_from_stdin() {
    let env = TestEnvironment::new().unwrap();

    depres(&env)
        .args(["resolve", "-"])
        .write_stdin("A depends on B\nB depends on A")
        .assert()
        .success()
        .stdout("A depends on B \nB depends on A \n");
}

#[test]
fn test_resolve_empty_input() {
    let env = TestEnvironment::with_input("").unwrap();

    depres(&env).args(["resolve", "deps.txt"]).assert().success().stdout("");
}

#[test]
fn test_resolve_reports_malformed_lines_on_stderr() {
    let env = TestEnvironment::with_input("A depends on B\n!!!garbage!!!\nB depends on C").unwrap();

    depres(&env)
        .args(["resolve", "deps.txt"])
        .assert()
        .success()
        .stdout("A depends on B C \nB depends on C \n")
        .stderr(predicate::str::contains("line 2: skipping invalid format: !!!garbage!!!"));
}

#[test]
fn test_resolve_quiet_hides_diagnostics() {
    let env = TestEnvironment::with_input("A depends on B\n!!!garbage!!!").unwrap();

    depres(&env)
        .args(["--quiet", "resolve", "deps.txt"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_resolve_strict_fails_on_malformed_lines() {
    let env = TestEnvironment::with_input("A depends on B\n!!!garbage!!!\nX depends on y-z").unwrap();

    depres(&env)
        .args(["resolve", "deps.txt", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("2 line(s) could not be parsed"));
}

#[test]
fn test_resolve_json() {
    let env = TestEnvironment::with_input("B depends on C\nA depends on B").unwrap();

    let output = depres(&env).args(["resolve", "deps.txt", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["A"], serde_json::json!(["B", "C"]));
    assert_eq!(value["B"], serde_json::json!(["C"]));
    assert!(stdout.find("\"B\"").unwrap() < stdout.find("\"A\"").unwrap());
}

#[test]
fn test_resolve_to_output_file() {
    let env = TestEnvironment::with_input("A depends on A B\nB depends on C\nC depends on D").unwrap();

    depres(&env)
        .args(["resolve", "deps.txt", "--output", "resolved.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        env.read_file("resolved.txt").unwrap(),
        "A depends on B C D \nB depends on C D \nC depends on D \n"
    );
}

#[test]
fn test_resolve_missing_file() {
    let env = TestEnvironment::new().unwrap();

    depres(&env)
        .args(["resolve", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found: missing.txt"));
}

#[test]
fn test_config_file_sets_defaults() {
    let env = TestEnvironment::with_input("A depends on \n!!!").unwrap();
    env.create_file("depres.toml", "format = \"json\"\n").unwrap();

    depres(&env)
        .args(["--config", "depres.toml", "resolve", "deps.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"A\": []"));

    env.create_file("strict.toml", "strict = true\n").unwrap();
    depres(&env)
        .args(["--config", "strict.toml", "resolve", "deps.txt"])
        .assert()
        .failure();
}

#[test]
fn test_config_in_home_directory() {
    let env = TestEnvironment::with_input("A depends on ").unwrap();
    env.create_file(".depres/config.toml", "format = \"json\"\n").unwrap();

    depres(&env)
        .args(["resolve", "deps.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_flag_overrides_config() {
    let env = TestEnvironment::with_input("A depends on ").unwrap();
    env.create_file("depres.toml", "format = \"json\"\n").unwrap();

    depres(&env)
        .args(["--config", "depres.toml", "resolve", "deps.txt", "--format", "text"])
        .assert()
        .success()
        .stdout("A depends on \n");
}

#[test]
fn test_invalid_config_file() {
    let env = TestEnvironment::with_input("A depends on ").unwrap();
    env.create_file("bad.toml", "format = [").unwrap();

    depres(&env)
        .args(["--config", "bad.toml", "resolve", "deps.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_config_from_env_var() {
    let env = TestEnvironment::with_input("A depends on ").unwrap();
    env.create_file("from-env.toml", "format = \"json\"\n").unwrap();

    depres(&env)
        .env("DEPRES_CONFIG", "from-env.toml")
        .args(["resolve", "deps.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"A\": []"));

    depres(&env)
        .env("DEPRES_CONFIG", "missing.toml")
        .args(["resolve", "deps.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}
