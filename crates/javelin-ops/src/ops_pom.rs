//! Operation: show or write the POM that would be published.

use std::path::Path;

use javelin_core::descriptor::Descriptor;
use javelin_maven::pom;
use javelin_util::errors::JavelinError;
use javelin_util::progress::status;

pub fn pom(project_root: &Path, out: Option<&Path>) -> miette::Result<()> {
    let descriptor = Descriptor::from_path(&project_root.join("Javelin.toml"))?;
    let config = descriptor
        .publication
        .ok_or_else(|| JavelinError::Config {
            message: "The [publication] section is required".to_string(),
        })?;

    let xml = match &config.pom {
        Some(configured) => std::fs::read_to_string(project_root.join(configured))
            .map_err(JavelinError::Io)?,
        None => pom::generate_pom(
            &config.group,
            &config.name,
            &config.version,
            config.packaging.as_deref().unwrap_or("jar"),
            config.description.as_deref(),
        ),
    };

    match out {
        Some(path) => {
            std::fs::write(path, &xml).map_err(JavelinError::Io)?;
            status("Wrote", &path.display().to_string());
        }
        None => print!("{xml}"),
    }
    Ok(())
}
