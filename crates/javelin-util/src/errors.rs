use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all javelin operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JavelinError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid configuration (e.g. Javelin.toml).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your Javelin.toml"))]
    Config { message: String },

    /// The publication failed pre-upload validation.
    #[error("Invalid publication: {message}")]
    Validation { message: String },

    /// Network request failed. `status` carries the HTTP status code when a
    /// response was received; connect and timeout failures leave it `None`.
    #[error("Network error: {message}")]
    Network { status: Option<u16>, message: String },

    /// The repository already holds this release version (HTTP 400).
    #[error("Version {version} already exists in the repository")]
    #[diagnostic(help("Release versions are immutable once published. Bump the version and publish again."))]
    VersionAlreadyExists { version: String },

    /// The upload was rejected as too large (HTTP 413).
    #[error("Upload exceeds the repository size limit of {limit_mb}MB")]
    PayloadTooLarge { limit_mb: u64 },

    /// The repository refused the write for a release version (HTTP 401/403).
    #[error("Not permitted to deploy release versions to '{repository}'")]
    #[diagnostic(help("Publish releases through your release channel, or check the repository credentials."))]
    ReleaseWriteDenied { repository: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl JavelinError {
    /// The HTTP status associated with this error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            JavelinError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type JavelinResult<T> = miette::Result<T>;
