//! CLI argument definitions for javelin.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "javelin",
    version,
    about = "Publish Maven artifacts to remote repositories",
    long_about = "javelin uploads a Maven publication (jar, POM, checksums and classified \
                  artifacts) described by Javelin.toml to a remote Maven repository."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a Javelin.toml in the current directory
    Init,

    /// Validate the publication without publishing
    Validate,

    /// Print the POM that would be published
    Pom {
        /// Write the POM to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Publish the publication to a repository
    Publish {
        /// Repository name from [repositories] (defaults to the sole entry)
        #[arg(short, long)]
        repository: Option<String>,

        /// Resolve and validate, then print the planned uploads
        #[arg(long)]
        dry_run: bool,
    },
}

/// Parse the process arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
