//! Operation: scaffold a javelin publication in the current directory.

use std::path::Path;

use javelin_util::errors::JavelinError;

const ENV_TEMPLATE: &str = "\
# Repository credentials for javelin. Keep this file out of version control.
REPO_USER=
REPO_PASS=
";

pub fn init(project_root: &Path) -> miette::Result<()> {
    let descriptor_path = project_root.join("Javelin.toml");
    if descriptor_path.exists() {
        return Err(JavelinError::Config {
            message: "Javelin.toml already exists in this directory".to_string(),
        }
        .into());
    }

    let name = project_root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "my-lib".to_string());

    std::fs::write(&descriptor_path, descriptor_template(&name)).map_err(JavelinError::Io)?;

    let env_path = project_root.join(".javelin.env");
    if !env_path.exists() {
        std::fs::write(&env_path, ENV_TEMPLATE).map_err(JavelinError::Io)?;
    }

    ensure_gitignored(project_root)?;

    println!("Initialized javelin publication '{name}'");
    Ok(())
}

fn descriptor_template(name: &str) -> String {
    format!(
        r#"[publication]
group = "com.example"
name = "{name}"
version = "0.1.0"
# description = "What this artifact is"
# pom = "pom.xml"            # publish an existing POM instead of generating one

[publication.files]
jar = "build/libs/{name}-0.1.0.jar"
# sources = {{ path = "build/libs/{name}-0.1.0-sources.jar", classifier = "sources" }}

[repositories]
releases = {{ url = "https://repo.example.com/releases", username = "${{env:REPO_USER}}", password = "${{env:REPO_PASS}}" }}
"#
    )
}

/// Make sure `.javelin.env` is ignored, creating or appending `.gitignore`.
fn ensure_gitignored(project_root: &Path) -> miette::Result<()> {
    let gitignore = project_root.join(".gitignore");
    let existing = std::fs::read_to_string(&gitignore).unwrap_or_default();
    if existing.lines().any(|l| l.trim() == ".javelin.env") {
        return Ok(());
    }
    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(".javelin.env\n");
    std::fs::write(&gitignore, content).map_err(JavelinError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_core::descriptor::Descriptor;

    #[test]
    fn scaffolded_descriptor_is_parseable() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-widget");
        std::fs::create_dir(&root).unwrap();

        init(&root).unwrap();

        let desc = Descriptor::from_path(&root.join("Javelin.toml")).unwrap();
        let publication = desc.publication.unwrap();
        assert_eq!(publication.name, "my-widget");
        assert_eq!(desc.repositories.len(), 1);
        assert!(root.join(".javelin.env").is_file());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("Javelin.toml"), "# mine").unwrap();

        let err = init(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("Javelin.toml")).unwrap(),
            "# mine"
        );
    }

    #[test]
    fn init_appends_gitignore_once() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(".gitignore"), "build/\n.javelin.env\n").unwrap();

        init(tmp.path()).unwrap();

        let gitignore = std::fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore.matches(".javelin.env").count(), 1);
    }
}
