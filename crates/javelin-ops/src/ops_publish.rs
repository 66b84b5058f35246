//! Operation: publish the publication to a repository.

use std::path::Path;

use javelin_core::descriptor::Descriptor;
use javelin_maven::publication::Publication;
use javelin_maven::repository::MavenRepository;
use javelin_maven::transport;
use javelin_util::errors::JavelinError;
use javelin_util::progress::{spinner, status, status_info};

/// Publish the descriptor's publication to the selected repository.
///
/// Both preconditions (a `[publication]` section and a usable repository)
/// are checked here, before any transport is constructed.
pub async fn publish(
    project_root: &Path,
    repository: Option<&str>,
    dry_run: bool,
    verbose: bool,
) -> miette::Result<()> {
    let descriptor = Descriptor::from_path(&project_root.join("Javelin.toml"))?;
    let config = descriptor
        .publication
        .clone()
        .ok_or_else(|| JavelinError::Config {
            message: "The [publication] section is required to publish".to_string(),
        })?;
    let repo = select_repository(&descriptor, repository)?;

    if verbose {
        status_info("Repository", &format!("{} at {}", repo.name, repo.url));
    }

    let staging = tempfile::tempdir().map_err(JavelinError::Io)?;
    let publication = Publication::normalize(&config, project_root, staging.path())?;

    if dry_run {
        javelin_maven::publish::validate(&publication)?;
        plan(&publication, &repo);
        return Ok(());
    }

    let client = transport::build_client()?;
    let sp = spinner(&format!(
        "Publishing {} to {}...",
        publication.coordinate(),
        repo.name
    ));
    let result = javelin_maven::publish::publish(&client, &publication, &repo).await;
    sp.finish_and_clear();
    result?;

    status(
        "Published",
        &format!("{} to {}", publication.coordinate(), repo.name),
    );
    Ok(())
}

/// Resolve the repository to publish to.
///
/// An explicit name must exist in `[repositories]`; with no name, the sole
/// configured repository is used. Anything else is a configuration error.
pub fn select_repository(
    descriptor: &Descriptor,
    name: Option<&str>,
) -> miette::Result<MavenRepository> {
    match name {
        Some(wanted) => descriptor
            .repositories
            .get(wanted)
            .map(|entry| MavenRepository::from_entry(wanted, entry))
            .ok_or_else(|| {
                JavelinError::Config {
                    message: format!("Repository '{wanted}' is not defined in Javelin.toml"),
                }
                .into()
            }),
        None => {
            let mut entries = descriptor.repositories.iter();
            match (entries.next(), entries.next()) {
                (Some((sole, entry)), None) => Ok(MavenRepository::from_entry(sole, entry)),
                (None, _) => Err(JavelinError::Config {
                    message: "No repositories are configured in Javelin.toml".to_string(),
                }
                .into()),
                (Some(_), Some(_)) => {
                    let names: Vec<_> = descriptor.repositories.keys().cloned().collect();
                    Err(JavelinError::Config {
                        message: format!(
                            "Multiple repositories configured ({}); pass --repository",
                            names.join(", ")
                        ),
                    }
                    .into())
                }
            }
        }
    }
}

fn plan(publication: &Publication, repo: &MavenRepository) {
    if publication.is_snapshot() {
        status_info(
            "Plan",
            "snapshot builds get timestamped file names at upload time",
        );
    }
    for file in &publication.files {
        let name = publication.file_name(file);
        status_info(
            "Plan",
            &format!(
                "PUT {}",
                repo.file_url(
                    &publication.group,
                    &publication.artifact,
                    &publication.version,
                    &name
                )
            ),
        );
    }
    status_info(
        "Plan",
        &format!(
            "PUT {}",
            repo.metadata_url(&publication.group, &publication.artifact)
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(toml: &str) -> Descriptor {
        Descriptor::parse_toml(toml).unwrap()
    }

    #[test]
    fn explicit_name_must_exist() {
        let desc = descriptor(
            r#"
[repositories]
releases = "https://repo.example.com/releases"
"#,
        );
        assert!(select_repository(&desc, Some("releases")).is_ok());
        let err = select_repository(&desc, Some("snapshots")).unwrap_err();
        assert!(err.to_string().contains("snapshots"));
    }

    #[test]
    fn sole_repository_is_the_default() {
        let desc = descriptor(
            r#"
[repositories]
releases = "https://repo.example.com/releases"
"#,
        );
        let repo = select_repository(&desc, None).unwrap();
        assert_eq!(repo.name, "releases");
    }

    #[test]
    fn no_repositories_is_a_config_error() {
        let desc = descriptor("");
        let err = select_repository(&desc, None).unwrap_err();
        assert!(err.to_string().contains("No repositories"));
    }

    #[test]
    fn ambiguous_repositories_need_a_flag() {
        let desc = descriptor(
            r#"
[repositories]
releases = "https://repo.example.com/releases"
snapshots = "https://repo.example.com/snapshots"
"#,
        );
        let err = select_repository(&desc, None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("--repository"));
        assert!(msg.contains("releases"));
    }
}
