use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
initial_techs = 2
preview = "yaml"

[profiles.default.schema]
password_min_len = 10
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("signup"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   signup doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("preview: yaml"))
        .stdout(predicate::str::contains("schema.password_min_len: 10"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    write_file(
        &tmp.path().join("signup").join("config.toml"),
        r#"
version = 1
profile = "default"
[profiles.default]
initial_techs = 3
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("signup"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   signup doctor"))
        .stdout(predicate::str::contains("initial_techs: 3"));
}

#[test]
fn doctor_falls_back_to_builtin_defaults() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("signup"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("schema.min_techs:        2"))
        .stdout(predicate::str::contains("schema.knowledge:        1..=10"));
}
