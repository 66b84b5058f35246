//! Command dispatch and handler modules.

mod init;
mod pom;
mod publish;
mod validate;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init::exec(),
        Command::Validate => validate::exec(cli.verbose),
        Command::Pom { out } => pom::exec(out.as_deref()),
        Command::Publish {
            repository,
            dry_run,
        } => publish::exec(repository.as_deref(), dry_run, cli.verbose).await,
    }
}
