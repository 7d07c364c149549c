use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_with_config_file() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1

[images]
width = "80%"
placement = "after_intro"
"#,
    )
    .unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("mdsplice"))
        .args(["doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   mdsplice doctor"))
        .stdout(predicate::str::contains("images.width: 80%"))
        .stdout(predicate::str::contains("images.placement: after_intro"));
}

#[test]
fn doctor_without_config_uses_defaults() {
    let tmp = tempdir().unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("mdsplice"))
        .env("XDG_CONFIG_HOME", tmp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("path: (defaults; no file at"))
        .stdout(predicate::str::contains("images.width: 50%"))
        .stdout(predicate::str::contains("images.placement: at_line"));
}

#[test]
fn doctor_reads_config_from_xdg_dir() {
    let tmp = tempdir().unwrap();
    let cfg_dir = tmp.path().join("mdsplice");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("config.toml"), "version = 1\n[images]\nwidth = \"\"\n").unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("mdsplice"))
        .env("XDG_CONFIG_HOME", tmp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("images.width: (markdown syntax)"));
}
