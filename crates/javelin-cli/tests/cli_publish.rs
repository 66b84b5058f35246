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

const PUBLISHABLE: &str = r#"
[publication]
group = "com.example"
name = "my-lib"
version = "1.0.0"

[publication.files]
jar = "lib.jar"

[repositories]
releases = "https://repo.example.com/releases"
"#;

#[test]
fn test_publish_without_descriptor_fails() {
    let tmp = TempDir::new().unwrap();

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Javelin.toml"));
}

#[test]
fn test_publish_requires_publication_section() {
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
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[publication]"));
}

#[test]
fn test_publish_requires_a_repository() {
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
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No repositories"));
}

#[test]
fn test_publish_rejects_unknown_repository_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lib.jar"), b"jar bytes").unwrap();
    write_descriptor(tmp.path(), PUBLISHABLE);

    javelin_cmd()
        .current_dir(tmp.path())
        .args(["publish", "--repository", "snapshots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("snapshots"));
}

#[test]
fn test_publish_with_ambiguous_repositories_needs_flag() {
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
snapshots = "https://repo.example.com/snapshots"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--repository"));
}

#[test]
fn test_dry_run_prints_planned_uploads() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lib.jar"), b"jar bytes").unwrap();
    write_descriptor(tmp.path(), PUBLISHABLE);

    javelin_cmd()
        .current_dir(tmp.path())
        .args(["publish", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "https://repo.example.com/releases/com/example/my-lib/1.0.0/my-lib-1.0.0.jar",
        ))
        .stderr(predicate::str::contains("my-lib-1.0.0.pom"))
        .stderr(predicate::str::contains("maven-metadata.xml"));
}

#[test]
fn test_dry_run_still_validates() {
    let tmp = TempDir::new().unwrap();
    // lib.jar is referenced but never created
    write_descriptor(tmp.path(), PUBLISHABLE);

    javelin_cmd()
        .current_dir(tmp.path())
        .args(["publish", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lib.jar"));
}

#[test]
fn test_dry_run_snapshot_notes_timestamped_names() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lib.jar"), b"jar bytes").unwrap();
    write_descriptor(
        tmp.path(),
        r#"
[publication]
group = "com.example"
name = "my-lib"
version = "1.0-SNAPSHOT"

[publication.files]
jar = "lib.jar"

[repositories]
snapshots = "https://repo.example.com/snapshots"
"#,
    );

    javelin_cmd()
        .current_dir(tmp.path())
        .args(["publish", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("timestamped"));
}
