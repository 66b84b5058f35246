//! Repository authentication using credentials from `Javelin.toml`.
//!
//! Authentication is configured per-repository in `Javelin.toml` using
//! `${env:SECRET}` interpolation from `.javelin.env`:
//!
//! ```toml
//! [repositories]
//! releases = { url = "https://nexus.co/maven", username = "${env:NEXUS_USER}", password = "${env:NEXUS_PASS}" }
//! ```
//!
//! By the time the descriptor is loaded, `${env:...}` values are already
//! interpolated, so this module just reads the resolved credentials.

use reqwest::RequestBuilder;

use crate::repository::MavenRepository;

/// Apply authentication to a request if the repository has credentials.
///
/// A username (with or without a password) selects HTTP basic auth; a bare
/// password is treated as a bearer token, which is how repository managers
/// accept deploy tokens. No credentials leaves the request anonymous.
pub fn apply_auth(request: RequestBuilder, repo: &MavenRepository) -> RequestBuilder {
    match (&repo.username, &repo.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        (Some(user), None) => request.basic_auth(user, None::<&str>),
        (None, Some(token)) => request.bearer_auth(token),
        (None, None) => request,
    }
}
