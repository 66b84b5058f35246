//! Handler for `javelin init`.

use miette::Result;

pub fn exec() -> Result<()> {
    let project_root = std::env::current_dir().map_err(javelin_util::errors::JavelinError::Io)?;
    javelin_ops::ops_init::init(&project_root)
}
