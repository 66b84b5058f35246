//! Handler for `javelin validate`.

use miette::Result;

pub fn exec(verbose: bool) -> Result<()> {
    let project_root = std::env::current_dir().map_err(javelin_util::errors::JavelinError::Io)?;

    if !project_root.join("Javelin.toml").is_file() {
        return Err(javelin_util::errors::JavelinError::Config {
            message: "No Javelin.toml found in current directory (run `javelin init`)".to_string(),
        }
        .into());
    }

    javelin_ops::ops_validate::validate(&project_root, verbose)
}
