//! Maven repository abstraction: URL layout and configuration.

use javelin_core::descriptor::RepositoryEntry;

/// A configured Maven repository with optional credentials.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    pub name: String,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl MavenRepository {
    /// Build a `MavenRepository` from a name and a descriptor `RepositoryEntry`.
    pub fn from_entry(name: &str, entry: &RepositoryEntry) -> Self {
        match entry {
            RepositoryEntry::Url(url) => Self {
                name: name.to_string(),
                url: url.trim_end_matches('/').to_string(),
                username: None,
                password: None,
            },
            RepositoryEntry::Detailed {
                url,
                username,
                password,
            } => Self {
                name: name.to_string(),
                url: url.trim_end_matches('/').to_string(),
                username: username.clone(),
                password: password.clone(),
            },
        }
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `com.example:my-lib:1.0.0` becomes `com/example/my-lib/1.0.0`
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// Full URL to a specific file within the version directory.
    pub fn file_url(&self, group: &str, artifact: &str, version: &str, filename: &str) -> String {
        format!(
            "{}/{}/{}",
            self.url,
            Self::coordinate_path(group, artifact, version),
            filename
        )
    }

    /// URL to the `maven-metadata.xml` at the artifact level (version listing).
    pub fn metadata_url(&self, group: &str, artifact: &str) -> String {
        format!(
            "{}/{}/{}/maven-metadata.xml",
            self.url,
            group.replace('.', "/"),
            artifact
        )
    }

    /// URL to the `maven-metadata.xml` at the version level (SNAPSHOT builds).
    pub fn snapshot_metadata_url(&self, group: &str, artifact: &str, version: &str) -> String {
        format!(
            "{}/{}/maven-metadata.xml",
            self.url,
            Self::coordinate_path(group, artifact, version)
        )
    }

    /// Whether this repository has authentication configured.
    pub fn has_auth(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}
