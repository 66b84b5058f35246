use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The parsed representation of a `Javelin.toml` file.
///
/// The `[publication]` section is optional so that its absence can be
/// reported as a configuration error by the publish operation rather than a
/// parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    pub publication: Option<PublicationConfig>,

    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryEntry>,
}

/// Publication identity and contents from the `[publication]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationConfig {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Path to a POM file to publish as-is. When absent, a POM is generated
    /// from the coordinates.
    #[serde(default)]
    pub pom: Option<String>,
    /// Artifact files keyed by a label (`jar`, `sources`, ...).
    #[serde(default)]
    pub files: BTreeMap<String, FileEntry>,
}

/// An artifact file, either a bare path or a detailed specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        classifier: Option<String>,
        #[serde(default)]
        extension: Option<String>,
    },
}

impl FileEntry {
    /// The configured file path.
    pub fn path(&self) -> &str {
        match self {
            FileEntry::Path(p) => p,
            FileEntry::Detailed { path, .. } => path,
        }
    }

    /// The configured classifier, if any.
    pub fn classifier(&self) -> Option<&str> {
        match self {
            FileEntry::Path(_) => None,
            FileEntry::Detailed { classifier, .. } => classifier.as_deref(),
        }
    }

    /// The configured extension override, if any.
    pub fn extension(&self) -> Option<&str> {
        match self {
            FileEntry::Path(_) => None,
            FileEntry::Detailed { extension, .. } => extension.as_deref(),
        }
    }
}

/// A Maven repository reference, either a URL string or a detailed
/// configuration with credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryEntry {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
    },
}

impl Descriptor {
    /// Load and parse a `Javelin.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the descriptor content are
    /// resolved using `.javelin.env` (if present alongside `Javelin.toml`)
    /// and process environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            javelin_util::errors::JavelinError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars =
            crate::properties::load_env_file(&dir.join(".javelin.env")).unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);

        Self::parse_toml(&resolved)
    }

    /// Parse a `Javelin.toml` from a string (no interpolation).
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            javelin_util::errors::JavelinError::Config {
                message: format!("Failed to parse Javelin.toml: {e}"),
            }
            .into()
        })
    }
}
