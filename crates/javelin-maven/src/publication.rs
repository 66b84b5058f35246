//! The normalised publication: coordinates plus the concrete artifact file
//! set, resolved from the descriptor and ready to upload.

use std::path::{Path, PathBuf};

use javelin_core::descriptor::PublicationConfig;

use crate::pom;

const DEFAULT_PACKAGING: &str = "jar";

/// A named, versioned artifact bundle ready for publishing.
#[derive(Debug, Clone)]
pub struct Publication {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub packaging: String,
    pub files: Vec<ArtifactFile>,
}

/// One file in the publication.
#[derive(Debug, Clone)]
pub struct ArtifactFile {
    pub path: PathBuf,
    pub extension: String,
    pub classifier: Option<String>,
}

impl Publication {
    /// Whether this publication uses the mutable snapshot convention.
    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with("-SNAPSHOT")
    }

    /// `group:artifact:version` form for display.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    /// Remote file name for an artifact: `artifact-version[-classifier].ext`.
    pub fn file_name(&self, file: &ArtifactFile) -> String {
        match &file.classifier {
            Some(c) => format!("{}-{}-{}.{}", self.artifact, self.version, c, file.extension),
            None => format!("{}-{}.{}", self.artifact, self.version, file.extension),
        }
    }

    /// Remote file name for a timestamped snapshot build.
    ///
    /// `base` is the `artifact-1.0-20240615.143022-5` form produced by
    /// [`crate::metadata::SnapshotMetadata::snapshot_base`].
    pub fn snapshot_file_name(&self, file: &ArtifactFile, base: &str) -> String {
        match &file.classifier {
            Some(c) => format!("{base}-{c}.{}", file.extension),
            None => format!("{base}.{}", file.extension),
        }
    }

    /// The publication's POM file, when one has been resolved.
    pub fn pom_file(&self) -> Option<&ArtifactFile> {
        self.files
            .iter()
            .find(|f| f.extension == "pom" && f.classifier.is_none())
    }

    /// Resolve a descriptor publication into a concrete file set.
    ///
    /// Relative paths resolve against `project_root`. When no POM file is
    /// configured, one is generated from the coordinates and written into
    /// `staging` (the caller owns the staging directory's lifetime; it must
    /// outlive the publish).
    pub fn normalize(
        config: &PublicationConfig,
        project_root: &Path,
        staging: &Path,
    ) -> miette::Result<Publication> {
        let packaging = config
            .packaging
            .clone()
            .unwrap_or_else(|| DEFAULT_PACKAGING.to_string());

        let mut files = Vec::new();

        let pom_path = match &config.pom {
            Some(configured) => project_root.join(configured),
            None => {
                let xml = pom::generate_pom(
                    &config.group,
                    &config.name,
                    &config.version,
                    &packaging,
                    config.description.as_deref(),
                );
                let path = staging.join(format!("{}-{}.pom", config.name, config.version));
                std::fs::write(&path, xml).map_err(javelin_util::errors::JavelinError::Io)?;
                path
            }
        };
        files.push(ArtifactFile {
            path: pom_path,
            extension: "pom".to_string(),
            classifier: None,
        });

        for entry in config.files.values() {
            let path = project_root.join(entry.path());
            let extension = match entry.extension() {
                Some(ext) => ext.to_string(),
                None => path
                    .extension()
                    .map(|e| e.to_string_lossy().to_string())
                    .unwrap_or_else(|| packaging.clone()),
            };
            files.push(ArtifactFile {
                path,
                extension,
                classifier: entry.classifier().map(|c| c.to_string()),
            });
        }

        Ok(Publication {
            group: config.group.clone(),
            artifact: config.name.clone(),
            version: config.version.clone(),
            packaging,
            files,
        })
    }
}
