use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("dbsrc").unwrap();
    cmd.arg("--help").assert().success();
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("dbsrc").unwrap();
    cmd.arg("--version").assert().success();
}

#[test]
fn test_add_requires_all_arguments() {
    let mut cmd = Command::cargo_bin("dbsrc").unwrap();
    cmd.args(["add", "prod", "postgres"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<DSN>"));
}

#[test]
fn test_path_prefers_flag_over_env() {
    let mut cmd = Command::cargo_bin("dbsrc").unwrap();
    cmd.env("DBSRC_CONFIG", "/tmp/from-env.yml")
        .args(["--config", "/tmp/from-flag.yml", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/from-flag.yml"));

    let mut cmd = Command::cargo_bin("dbsrc").unwrap();
    cmd.env("DBSRC_CONFIG", "/tmp/from-env.yml")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/from-env.yml"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_config_path_is_kept() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    let config_path = dir.path().join(OsStr::from_bytes(b"cfg\xff.yml"));

    let mut cmd = Command::cargo_bin("dbsrc").unwrap();
    cmd.env("HOME", home.path())
        .env("DBSRC_CONFIG", &config_path)
        .args(["add", "prod", "postgres", "postgres://u@h/db"])
        .assert()
        .success();

    assert!(config_path.exists());
    assert!(!home.path().join(".config").exists());

    let mut cmd = Command::cargo_bin("dbsrc").unwrap();
    let output = cmd
        .env("HOME", home.path())
        .env_remove("DBSRC_CONFIG")
        .arg("--config")
        .arg(&config_path)
        .arg("path")
        .output()
        .unwrap();
    assert!(output.status.success());

    let mut expected = config_path.as_os_str().as_bytes().to_vec();
    expected.push(b'\n');
    assert_eq!(output.stdout, expected);
}
