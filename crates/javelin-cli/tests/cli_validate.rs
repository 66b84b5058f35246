use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn javelin_cmd() -> Command {
    Command::cargo_bin("javelin").unwrap()
}

fn write_descriptor(dir: &std::path::Path, content: &str) {
    fs::write(dir.join("Javelin.toml"), content).unwrap();
}

#[test]
fn test_validate_without_descriptor_fails() {
    let tmp = TempDir::new().unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Javelin.toml"));
}

#[test]
fn test_validate_passes_with_generated_pom() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lib.jar"), b"jar bytes").unwrap();
    write_descriptor(
        tmp.path(),
        r#"
[publication]
group = "com.example"
name = "my-lib"
version = "1.0.0"

[publication.files]
jar = "lib.jar"

[repositories]
releases = "https://repo.example.com/releases"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("Validated"))
        .stderr(predicate::str::contains("com.example:my-lib:1.0.0"));
}

#[test]
fn test_validate_reports_missing_artifact_file() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        tmp.path(),
        r#"
[publication]
group = "com.example"
name = "my-lib"
version = "1.0.0"

[publication.files]
jar = "missing.jar"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.jar"));
}

#[test]
fn test_validate_reports_pom_coordinate_mismatch() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("pom.xml"),
        r#"<project>
  <groupId>com.example</groupId>
  <artifactId>my-lib</artifactId>
  <version>9.9.9</version>
</project>"#,
    )
    .unwrap();
    write_descriptor(
        tmp.path(),
        r#"
[publication]
group = "com.example"
name = "my-lib"
version = "1.0.0"
pom = "pom.xml"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("9.9.9"));
}

#[test]
fn test_validate_requires_publication_section() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        tmp.path(),
        r#"
[repositories]
releases = "https://repo.example.com/releases"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[publication]"));
}

#[test]
fn test_pom_prints_generated_pom() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        tmp.path(),
        r#"
[publication]
group = "com.example"
name = "my-lib"
version = "1.0.0"
description = "A test library"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("pom")
        .assert()
        .success()
        .stdout(predicate::str::contains("<groupId>com.example</groupId>"))
        .stdout(predicate::str::contains("<description>A test library</description>"));
}

#[test]
fn test_pom_writes_to_file() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        tmp.path(),
        r#"
[publication]
group = "com.example"
name = "my-lib"
version = "1.0.0"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .args(["pom", "--out", "generated.pom"])
        .assert()
        .success();

    let xml = fs::read_to_string(tmp.path().join("generated.pom")).unwrap();
    assert!(xml.contains("<artifactId>my-lib</artifactId>"));
}
