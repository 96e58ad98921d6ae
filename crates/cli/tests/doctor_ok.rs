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
notes_root = "/tmp/brain/Reference"

[board]
format = "grid"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nk"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   nk doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("notes_root: /tmp/brain/Reference"))
        .stdout(predicate::str::contains("min_query_length: 3"))
        .stdout(predicate::str::contains("board.format: grid"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_dir = tmp.path().join("notekit");
    let cfg_path = cfg_dir.join("config.toml");
    fs::create_dir_all(&cfg_dir).unwrap();
    write_file(
        &cfg_path,
        "version = 1\nprofile = \"default\"\n\n[profiles.default]\nnotes_root = \"/tmp/xdg-brain\"\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nk"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   nk doctor"))
        .stdout(predicate::str::contains("notes_root: /tmp/xdg-brain"));
}
