//! Operation: validate the publication without touching the network.

use std::path::Path;

use javelin_core::descriptor::Descriptor;
use javelin_maven::publication::Publication;
use javelin_util::errors::JavelinError;
use javelin_util::progress::{status, status_info};

pub fn validate(project_root: &Path, verbose: bool) -> miette::Result<()> {
    let descriptor = Descriptor::from_path(&project_root.join("Javelin.toml"))?;
    let config = descriptor
        .publication
        .ok_or_else(|| JavelinError::Config {
            message: "The [publication] section is required to validate".to_string(),
        })?;

    let staging = tempfile::tempdir().map_err(JavelinError::Io)?;
    let publication = Publication::normalize(&config, project_root, staging.path())?;
    javelin_maven::publish::validate(&publication)?;

    if verbose {
        for file in &publication.files {
            status_info("Checked", &publication.file_name(file));
        }
    }
    status(
        "Validated",
        &format!(
            "{} ({} files)",
            publication.coordinate(),
            publication.files.len()
        ),
    );
    Ok(())
}
