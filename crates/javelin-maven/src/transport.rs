//! HTTP transport for repository uploads.
//!
//! One attempt per request: an upload failure is terminal for the publish
//! invocation, so there is no retry loop here. Failures carry the HTTP
//! status code when the server answered, letting the publish boundary
//! reclassify them without inspecting message text.

use std::time::Duration;

use reqwest::Client;

use crate::auth;
use crate::repository::MavenRepository;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a shared reqwest client for repository traffic.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("javelin/0.3")
        .build()
        .map_err(|e| {
            javelin_util::errors::JavelinError::Network {
                status: None,
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// PUT a payload to the repository, with authentication.
pub async fn put_bytes(
    client: &Client,
    repo: &MavenRepository,
    url: &str,
    data: Vec<u8>,
) -> miette::Result<()> {
    let mut req = client.put(url).body(data);
    req = auth::apply_auth(req, repo);

    match req.send().await {
        Ok(resp) => {
            let status = resp.status();
            if status.is_success() {
                tracing::debug!("PUT {url} -> {status}");
                Ok(())
            } else {
                Err(javelin_util::errors::JavelinError::Network {
                    status: Some(status.as_u16()),
                    message: format!("HTTP {status} uploading {url}"),
                }
                .into())
            }
        }
        Err(e) => Err(javelin_util::errors::JavelinError::Network {
            status: e.status().map(|s| s.as_u16()),
            message: format!("Request to {url} failed: {e}"),
        }
        .into()),
    }
}

/// GET a text file from the repository. Returns `Ok(None)` for 404.
pub async fn get_text(
    client: &Client,
    repo: &MavenRepository,
    url: &str,
) -> miette::Result<Option<String>> {
    let mut req = client.get(url);
    req = auth::apply_auth(req, repo);

    match req.send().await {
        Ok(resp) => {
            let status = resp.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if !status.is_success() {
                return Err(javelin_util::errors::JavelinError::Network {
                    status: Some(status.as_u16()),
                    message: format!("HTTP {status} fetching {url}"),
                }
                .into());
            }
            let text =
                resp.text()
                    .await
                    .map_err(|e| javelin_util::errors::JavelinError::Network {
                        status: None,
                        message: format!("Failed to read response from {url}: {e}"),
                    })?;
            Ok(Some(text))
        }
        Err(e) => Err(javelin_util::errors::JavelinError::Network {
            status: e.status().map(|s| s.as_u16()),
            message: format!("Request to {url} failed: {e}"),
        }
        .into()),
    }
}
