use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_explicit_config_missing() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("signup"));
    cmd.args(["doctor", "--config", missing.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL signup doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_rejects_inverted_knowledge_range() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1
[profiles.default.schema]
knowledge_min = 8
knowledge_max = 3
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("signup"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("invalid schema in profile 'default'"));
}

#[test]
fn doctor_fails_for_unknown_profile_without_config() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("signup"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["doctor", "--profile", "strict"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("profile 'strict' not found"))
        .stdout(predicate::str::contains("looked for:"));
}
