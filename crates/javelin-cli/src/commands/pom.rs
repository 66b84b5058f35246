//! Handler for `javelin pom`.

use std::path::Path;

use miette::Result;

pub fn exec(out: Option<&Path>) -> Result<()> {
    let project_root = std::env::current_dir().map_err(javelin_util::errors::JavelinError::Io)?;

    if !project_root.join("Javelin.toml").is_file() {
        return Err(javelin_util::errors::JavelinError::Config {
            message: "No Javelin.toml found in current directory (run `javelin init`)".to_string(),
        }
        .into());
    }

    javelin_ops::ops_pom::pom(&project_root, out)
}
