//! maven-metadata.xml maintenance: parsing the repository's existing
//! metadata, merging in a published version, and rendering it back.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::pom::push_element;

/// Artifact-level Maven metadata listing available versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MavenMetadata {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub latest: Option<String>,
    pub release: Option<String>,
    pub versions: Vec<String>,
    pub last_updated: Option<String>,
}

impl MavenMetadata {
    /// Fresh metadata for an artifact that has never been published.
    pub fn for_artifact(group: &str, artifact: &str) -> Self {
        Self {
            group_id: Some(group.to_string()),
            artifact_id: Some(artifact.to_string()),
            ..Default::default()
        }
    }

    /// Merge a newly published version into the version listing.
    ///
    /// `latest` always moves to the new version; `release` only moves for
    /// non-snapshot versions. `last_updated` is a `yyyyMMddHHmmss` UTC stamp
    /// supplied by the caller.
    pub fn merge_version(&mut self, version: &str, is_snapshot: bool, last_updated: &str) {
        if !self.versions.iter().any(|v| v == version) {
            self.versions.push(version.to_string());
        }
        self.latest = Some(version.to_string());
        if !is_snapshot {
            self.release = Some(version.to_string());
        }
        self.last_updated = Some(last_updated.to_string());
    }

    /// Render the metadata document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<metadata>\n");
        if let Some(ref g) = self.group_id {
            push_element(&mut xml, 2, "groupId", g);
        }
        if let Some(ref a) = self.artifact_id {
            push_element(&mut xml, 2, "artifactId", a);
        }
        xml.push_str("  <versioning>\n");
        if let Some(ref latest) = self.latest {
            push_element(&mut xml, 4, "latest", latest);
        }
        if let Some(ref release) = self.release {
            push_element(&mut xml, 4, "release", release);
        }
        xml.push_str("    <versions>\n");
        for version in &self.versions {
            push_element(&mut xml, 6, "version", version);
        }
        xml.push_str("    </versions>\n");
        if let Some(ref stamp) = self.last_updated {
            push_element(&mut xml, 4, "lastUpdated", stamp);
        }
        xml.push_str("  </versioning>\n");
        xml.push_str("</metadata>\n");
        xml
    }
}

/// Version-level snapshot metadata for timestamped SNAPSHOT builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotMetadata {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<String>,
    pub build_number: Option<u32>,
    pub last_updated: Option<String>,
}

impl SnapshotMetadata {
    /// Allocate the next snapshot build for a version, continuing the build
    /// numbering from the repository's previous metadata (1 when absent).
    ///
    /// `timestamp` uses the `yyyyMMdd.HHmmss` form, `last_updated` the
    /// `yyyyMMddHHmmss` form, both UTC and supplied by the caller.
    pub fn next_build(
        group: &str,
        artifact: &str,
        version: &str,
        previous: Option<&SnapshotMetadata>,
        timestamp: &str,
        last_updated: &str,
    ) -> Self {
        let build_number = previous
            .and_then(|m| m.build_number)
            .map_or(1, |n| n.saturating_add(1));
        Self {
            group_id: Some(group.to_string()),
            artifact_id: Some(artifact.to_string()),
            version: Some(version.to_string()),
            timestamp: Some(timestamp.to_string()),
            build_number: Some(build_number),
            last_updated: Some(last_updated.to_string()),
        }
    }

    /// Build a timestamped snapshot base name.
    ///
    /// For version `1.0-SNAPSHOT` with timestamp `20240101.120000` and build
    /// `5`, returns `artifactId-1.0-20240101.120000-5`.
    pub fn snapshot_base(&self, artifact_id: &str) -> Option<String> {
        let version = self.version.as_deref()?;
        let base = version.strip_suffix("-SNAPSHOT")?;
        let ts = self.timestamp.as_deref()?;
        let bn = self.build_number?;
        Some(format!("{artifact_id}-{base}-{ts}-{bn}"))
    }

    /// Render the version-level metadata document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<metadata>\n");
        if let Some(ref g) = self.group_id {
            push_element(&mut xml, 2, "groupId", g);
        }
        if let Some(ref a) = self.artifact_id {
            push_element(&mut xml, 2, "artifactId", a);
        }
        if let Some(ref v) = self.version {
            push_element(&mut xml, 2, "version", v);
        }
        xml.push_str("  <versioning>\n");
        xml.push_str("    <snapshot>\n");
        if let Some(ref ts) = self.timestamp {
            push_element(&mut xml, 6, "timestamp", ts);
        }
        if let Some(bn) = self.build_number {
            push_element(&mut xml, 6, "buildNumber", &bn.to_string());
        }
        xml.push_str("    </snapshot>\n");
        if let Some(ref stamp) = self.last_updated {
            push_element(&mut xml, 4, "lastUpdated", stamp);
        }
        xml.push_str("  </versioning>\n");
        xml.push_str("</metadata>\n");
        xml
    }
}

/// Parse an artifact-level `maven-metadata.xml` that lists available versions.
pub fn parse_metadata(xml: &str) -> miette::Result<MavenMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = MavenMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path.join(">");

                match ctx.as_str() {
                    "metadata>groupId" => meta.group_id = Some(text_buf.clone()),
                    "metadata>artifactId" => meta.artifact_id = Some(text_buf.clone()),
                    "metadata>versioning>latest" => meta.latest = Some(text_buf.clone()),
                    "metadata>versioning>release" => meta.release = Some(text_buf.clone()),
                    "metadata>versioning>versions>version" => {
                        meta.versions.push(text_buf.clone());
                    }
                    "metadata>versioning>lastUpdated" => {
                        meta.last_updated = Some(text_buf.clone());
                    }
                    _ => {}
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(javelin_util::errors::JavelinError::Generic {
                    message: format!("Failed to parse maven-metadata.xml: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(meta)
}

/// Parse a version-level `maven-metadata.xml` carrying snapshot build info.
pub fn parse_snapshot_metadata(xml: &str) -> miette::Result<SnapshotMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = SnapshotMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path.join(">");

                match ctx.as_str() {
                    "metadata>groupId" => meta.group_id = Some(text_buf.clone()),
                    "metadata>artifactId" => meta.artifact_id = Some(text_buf.clone()),
                    "metadata>version" => meta.version = Some(text_buf.clone()),
                    "metadata>versioning>snapshot>timestamp" => {
                        meta.timestamp = Some(text_buf.clone());
                    }
                    "metadata>versioning>snapshot>buildNumber" => {
                        meta.build_number = text_buf.parse().ok();
                    }
                    "metadata>versioning>lastUpdated" => {
                        meta.last_updated = Some(text_buf.clone());
                    }
                    _ => {}
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(javelin_util::errors::JavelinError::Generic {
                    message: format!("Failed to parse snapshot metadata: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(meta)
}
