use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn javelin_cmd() -> Command {
    Command::cargo_bin("javelin").unwrap()
}

#[test]
fn test_init_scaffolds_descriptor() {
    let tmp = TempDir::new().unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized javelin publication"));

    assert!(tmp.path().join("Javelin.toml").is_file());
    assert!(tmp.path().join(".javelin.env").is_file());
    assert!(tmp.path().join(".gitignore").is_file());

    let descriptor = fs::read_to_string(tmp.path().join("Javelin.toml")).unwrap();
    assert!(descriptor.contains("[publication]"));
    assert!(descriptor.contains("[repositories]"));
    assert!(descriptor.contains("${env:REPO_USER}"));
}

#[test]
fn test_scaffolded_descriptor_is_parseable() {
    let tmp = TempDir::new().unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let content = fs::read_to_string(tmp.path().join("Javelin.toml")).unwrap();
    let parsed = javelin_core::descriptor::Descriptor::parse_toml(&content);
    assert!(parsed.is_ok(), "Generated Javelin.toml should be parseable");
}

#[test]
fn test_init_gitignores_env_file() {
    let tmp = TempDir::new().unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let gitignore = fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains(".javelin.env"));
}

#[test]
fn test_init_preserves_existing_gitignore() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".gitignore"), "build/\n").unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let gitignore = fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains("build/"));
    assert!(gitignore.contains(".javelin.env"));
}

#[test]
fn test_init_refuses_existing_descriptor() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Javelin.toml"), "# hand-written\n").unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure();

    assert_eq!(
        fs::read_to_string(tmp.path().join("Javelin.toml")).unwrap(),
        "# hand-written\n"
    );
}

#[test]
fn test_scaffolded_descriptor_validates_after_adding_the_jar() {
    let tmp = TempDir::new().unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    // The scaffold points at build/libs/<name>-0.1.0.jar; create it.
    let name = tmp.path().file_name().unwrap().to_string_lossy().to_string();
    let libs = tmp.path().join("build/libs");
    fs::create_dir_all(&libs).unwrap();
    fs::write(libs.join(format!("{name}-0.1.0.jar")), b"jar bytes").unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("Validated"));
}
