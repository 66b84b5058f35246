//! The publisher chain: remote transport, process-wide publish locking,
//! and pre-upload validation, plus the error reclassification applied at
//! the publish boundary.

use std::collections::HashSet;

use reqwest::Client;
use tokio::sync::Mutex;

use javelin_util::errors::JavelinError;
use javelin_util::progress;

use crate::checksum;
use crate::metadata::{self, MavenMetadata, SnapshotMetadata};
use crate::pom;
use crate::publication::Publication;
use crate::repository::MavenRepository;
use crate::transport;

/// Upload ceiling enforced by the repository; reported when it answers 413.
pub const PAYLOAD_LIMIT_MB: u64 = 200;

// Publishes within one process serialize behind this lock.
static PUBLISH_LOCK: Mutex<()> = Mutex::const_new(());

/// Uploads a publication to a repository.
#[allow(async_fn_in_trait)]
pub trait Publisher {
    async fn publish(
        &self,
        publication: &Publication,
        repository: &MavenRepository,
    ) -> miette::Result<()>;
}

/// Publish through the full chain: validation, then the process-wide lock,
/// then the remote transport. Failures pass through [`reclassify`] once at
/// this boundary.
pub async fn publish(
    client: &Client,
    publication: &Publication,
    repository: &MavenRepository,
) -> miette::Result<()> {
    let chain = ValidatingPublisher::new(LockingPublisher::new(RemotePublisher::new(
        client.clone(),
    )));
    chain
        .publish(publication, repository)
        .await
        .map_err(|e| reclassify(e, publication, repository))
}

/// Rewrite known transport failures into user-facing errors.
///
/// Switches on the HTTP status carried by [`JavelinError::Network`]:
/// 413 becomes a size-limit error for every version; 400 (duplicate) and
/// 401/403 (write refused) are rewritten for release versions only, since
/// snapshots are legitimately re-deployed. Everything else, including
/// failures without a status, is returned unchanged.
pub fn reclassify(
    err: miette::Report,
    publication: &Publication,
    repository: &MavenRepository,
) -> miette::Report {
    let Some(status) = err
        .downcast_ref::<JavelinError>()
        .and_then(|e| e.http_status())
    else {
        return err;
    };

    let snapshot = publication.is_snapshot();
    match status {
        413 => JavelinError::PayloadTooLarge {
            limit_mb: PAYLOAD_LIMIT_MB,
        }
        .into(),
        400 if !snapshot => JavelinError::VersionAlreadyExists {
            version: publication.version.clone(),
        }
        .into(),
        401 | 403 if !snapshot => JavelinError::ReleaseWriteDenied {
            repository: repository.name.clone(),
        }
        .into(),
        _ => err,
    }
}

/// The transport leg: PUTs every artifact with checksum sidecars and keeps
/// the repository's metadata documents current.
pub struct RemotePublisher {
    client: Client,
}

impl RemotePublisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn put_with_checksums(
        &self,
        repo: &MavenRepository,
        url: &str,
        data: Vec<u8>,
    ) -> miette::Result<()> {
        let sums = checksum::compute(&data);
        transport::put_bytes(&self.client, repo, url, data).await?;
        for (suffix, value) in sums.sidecars() {
            let sidecar_url = format!("{url}{suffix}");
            transport::put_bytes(&self.client, repo, &sidecar_url, value.as_bytes().to_vec())
                .await?;
        }
        Ok(())
    }

    async fn upload_file(
        &self,
        publication: &Publication,
        repo: &MavenRepository,
        file: &crate::publication::ArtifactFile,
        remote_name: &str,
    ) -> miette::Result<()> {
        let data = std::fs::read(&file.path).map_err(JavelinError::Io)?;
        progress::status("Uploading", remote_name);
        let url = repo.file_url(
            &publication.group,
            &publication.artifact,
            &publication.version,
            remote_name,
        );
        self.put_with_checksums(repo, &url, data).await
    }

    async fn update_artifact_metadata(
        &self,
        publication: &Publication,
        repo: &MavenRepository,
        last_updated: &str,
    ) -> miette::Result<()> {
        let url = repo.metadata_url(&publication.group, &publication.artifact);
        let mut meta = match transport::get_text(&self.client, repo, &url).await? {
            Some(xml) => metadata::parse_metadata(&xml)?,
            None => MavenMetadata::for_artifact(&publication.group, &publication.artifact),
        };
        meta.merge_version(&publication.version, publication.is_snapshot(), last_updated);
        tracing::debug!("updating {url}");
        self.put_with_checksums(repo, &url, meta.to_xml().into_bytes())
            .await
    }

    async fn publish_release(
        &self,
        publication: &Publication,
        repo: &MavenRepository,
    ) -> miette::Result<()> {
        for file in &publication.files {
            let name = publication.file_name(file);
            self.upload_file(publication, repo, file, &name).await?;
        }
        let (_, last_updated) = utc_stamps();
        self.update_artifact_metadata(publication, repo, &last_updated)
            .await
    }

    async fn publish_snapshot(
        &self,
        publication: &Publication,
        repo: &MavenRepository,
    ) -> miette::Result<()> {
        let meta_url = repo.snapshot_metadata_url(
            &publication.group,
            &publication.artifact,
            &publication.version,
        );
        let previous = match transport::get_text(&self.client, repo, &meta_url).await? {
            Some(xml) => Some(metadata::parse_snapshot_metadata(&xml)?),
            None => None,
        };

        let (timestamp, last_updated) = utc_stamps();
        let snap = SnapshotMetadata::next_build(
            &publication.group,
            &publication.artifact,
            &publication.version,
            previous.as_ref(),
            &timestamp,
            &last_updated,
        );
        let base = snap
            .snapshot_base(&publication.artifact)
            .ok_or_else(|| JavelinError::Generic {
                message: format!(
                    "Cannot derive snapshot build name for version {}",
                    publication.version
                ),
            })?;

        for file in &publication.files {
            let name = publication.snapshot_file_name(file, &base);
            self.upload_file(publication, repo, file, &name).await?;
        }

        self.put_with_checksums(repo, &meta_url, snap.to_xml().into_bytes())
            .await?;
        self.update_artifact_metadata(publication, repo, &last_updated)
            .await
    }
}

impl Publisher for RemotePublisher {
    async fn publish(
        &self,
        publication: &Publication,
        repository: &MavenRepository,
    ) -> miette::Result<()> {
        if publication.is_snapshot() {
            self.publish_snapshot(publication, repository).await
        } else {
            self.publish_release(publication, repository).await
        }
    }
}

/// Serialises publishes within the process behind a static lock, so two
/// concurrent invocations cannot interleave their metadata updates.
pub struct LockingPublisher<P> {
    inner: P,
}

impl<P> LockingPublisher<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Publisher> Publisher for LockingPublisher<P> {
    async fn publish(
        &self,
        publication: &Publication,
        repository: &MavenRepository,
    ) -> miette::Result<()> {
        let _guard = PUBLISH_LOCK.lock().await;
        self.inner.publish(publication, repository).await
    }
}

/// Validates the publication before delegating; a rejected publication
/// never reaches the inner publisher.
pub struct ValidatingPublisher<P> {
    inner: P,
}

impl<P> ValidatingPublisher<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Publisher> Publisher for ValidatingPublisher<P> {
    async fn publish(
        &self,
        publication: &Publication,
        repository: &MavenRepository,
    ) -> miette::Result<()> {
        validate(publication)?;
        self.inner.publish(publication, repository).await
    }
}

/// Check a publication against the rules a repository would reject it for.
pub fn validate(publication: &Publication) -> miette::Result<()> {
    check_coordinate_part("group", &publication.group)?;
    check_coordinate_part("artifact", &publication.artifact)?;

    if publication.version.is_empty() {
        return Err(JavelinError::Validation {
            message: "version must not be empty".to_string(),
        }
        .into());
    }
    if publication.version.contains('/') || publication.version.contains('\\') {
        return Err(JavelinError::Validation {
            message: format!(
                "version '{}' must not contain path separators",
                publication.version
            ),
        }
        .into());
    }

    let pom_file = publication.pom_file().ok_or_else(|| JavelinError::Validation {
        message: "publication has no POM file".to_string(),
    })?;

    let mut seen: HashSet<(Option<String>, String)> = HashSet::new();
    for file in &publication.files {
        let meta = std::fs::metadata(&file.path).map_err(|_| JavelinError::Validation {
            message: format!("artifact file {} does not exist", file.path.display()),
        })?;
        if !meta.is_file() {
            return Err(JavelinError::Validation {
                message: format!("artifact file {} is not a regular file", file.path.display()),
            }
            .into());
        }
        if meta.len() == 0 {
            return Err(JavelinError::Validation {
                message: format!("artifact file {} is empty", file.path.display()),
            }
            .into());
        }
        if !seen.insert((file.classifier.clone(), file.extension.clone())) {
            return Err(JavelinError::Validation {
                message: format!(
                    "multiple artifacts with classifier '{}' and extension '{}'",
                    file.classifier.as_deref().unwrap_or(""),
                    file.extension
                ),
            }
            .into());
        }
    }

    let pom_xml =
        std::fs::read_to_string(&pom_file.path).map_err(JavelinError::Io)?;
    let parsed = pom::parse_pom(&pom_xml)?;
    check_pom_field("groupId", parsed.effective_group_id(), &publication.group)?;
    check_pom_field("artifactId", parsed.artifact_id.as_deref(), &publication.artifact)?;
    check_pom_field("version", parsed.effective_version(), &publication.version)?;

    Ok(())
}

fn check_coordinate_part(what: &str, value: &str) -> miette::Result<()> {
    if value.is_empty() {
        return Err(JavelinError::Validation {
            message: format!("{what} must not be empty"),
        }
        .into());
    }
    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !valid {
        return Err(JavelinError::Validation {
            message: format!("{what} '{value}' contains invalid characters"),
        }
        .into());
    }
    Ok(())
}

fn check_pom_field(field: &str, pom_value: Option<&str>, expected: &str) -> miette::Result<()> {
    match pom_value {
        Some(v) if v == expected => Ok(()),
        Some(v) => Err(JavelinError::Validation {
            message: format!("POM {field} '{v}' does not match publication value '{expected}'"),
        }
        .into()),
        None => Err(JavelinError::Validation {
            message: format!("POM is missing {field}"),
        }
        .into()),
    }
}

fn utc_stamps() -> (String, String) {
    let now = chrono::Utc::now();
    (
        now.format("%Y%m%d.%H%M%S").to_string(),
        now.format("%Y%m%d%H%M%S").to_string(),
    )
}
