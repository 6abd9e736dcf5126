//! API client library.
//!
//! A small Rust client for the service's HTTP API, used by the CLI binary
//! and the integration tests. It handles request/response serialization and
//! turns non-success statuses into [`Error::Api`].

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::api::{ErrorResponse, StatusResponse};
use crate::config::DEFAULT_PORT;
use crate::error::{Error, Result};
use crate::inventory::Component;
use crate::tracing::prelude::*;

/// Client for one sbom-scanner instance.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the service at `base_url` (e.g.,
    /// "http://127.0.0.1:8080").
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client for a service running on this host's default port.
    pub fn local() -> Self {
        Self::new(format!("http://127.0.0.1:{DEFAULT_PORT}"))
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the service status.
    pub async fn status(&self) -> Result<StatusResponse> {
        self.get("/").await
    }

    /// Fetch the component inventory, in service order.
    pub async fn components(&self) -> Result<Vec<Component>> {
        self.get("/components").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(%status, error = %e, "Failed to read error response body");
            String::new()
        }
    };
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.error,
        Err(_) if body.is_empty() => status.to_string(),
        Err(_) => body,
    };
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let client = Client::new("http://localhost:8080//");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_local() {
        assert_eq!(Client::local().base_url(), "http://127.0.0.1:8080");
    }
}
