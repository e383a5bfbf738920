//! Integration tests for the `depres tree` command.

use assert_cmd::Command;
use depres::test_utils::TestEnvironment;
use predicates::prelude::*;

fn depres(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("depres").unwrap();
    cmd.current_dir(env.path())
        .env_remove("DEPRES_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", env.path());
    cmd
}

#[test]
fn test_tree_single_package() {
    let env = TestEnvironment::with_input("A depends on B C\nB depends on C\nC depends on ").unwrap();

    depres(&env)
        .args(["tree", "deps.txt", "--package", "A"])
        .assert()
        .success()
        .stdout("A\n├── B\n│   └── C\n└── C\n");
}

#[test]
fn test_tree_all_entities() {
    let env = TestEnvironment::with_input("A depends on B\nB depends on ").unwrap();

    depres(&env).args(["tree", "deps.txt"]).assert().success().stdout("A\n└── B\n\nB\n");
}

#[test]
fn test_tree_with_depth() {
    let env = TestEnvironment::with_input("A depends on B\nB depends on C\nC depends on D").unwrap();

    depres(&env)
        .args(["tree", "deps.txt", "-p", "A", "--depth", "1"])
        .assert()
        .success()
        .stdout("A\n└── B\n");
}

#[test]
fn test_tree_cycle() {
    let env = TestEnvironment::with_input("A depends on B\nB depends on A").unwrap();

    depres(&env)
        .args(["tree", "deps.txt", "-p", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B (circular reference)"));
}

#[test]
fn test_tree_unknown_package() {
    let env = TestEnvironment::with_input("A depends on B").unwrap();

    depres(&env)
        .args(["tree", "deps.txt", "-p", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entity 'B' is not declared"));
}

#[test]
fn test_tree_shared_dependency_drawn_once() {
    let input = "A depends on B C\nB depends on D\nC depends on D\nD depends on E";
    let env = TestEnvironment::with_input(input).unwrap();

    depres(&env)
        .args(["tree", "deps.txt", "-p", "A"])
        .assert()
        .success()
        .stdout("A\n├── B\n│   └── D\n│       └── E\n└── C\n    └── D (*)\n");
}
