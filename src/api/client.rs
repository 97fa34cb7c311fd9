//
//  github-product
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the GitHub API
//!
//! This module provides the HTTP client used to inspect GitHub endpoints and
//! the [`MetaApi`] seam the product resolver depends on.
//!
//! ## Features
//!
//! - One client type for GitHub.com, GHE.com and GitHub Enterprise Server
//! - Authentication header injection
//! - GitHub REST headers (`Accept`, `X-GitHub-Api-Version`)
//! - Status code mapping to [`ApiError`]
//! - Custom User-Agent header
//!
//! No retries, timeouts, or caching are layered on top of `reqwest`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{ApiError, Meta};
use crate::auth::AuthCredential;
use crate::config::{api_url_for_host, HostConfig, GITHUB_API_URL};

/// REST API version pinned on every request.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// The part of an API client the product resolver needs.
///
/// [`GitHubClient`] is the production implementation; tests can supply their
/// own to avoid the network.
#[async_trait]
pub trait MetaApi: Send + Sync {
    /// The API base URL this client is bound to, as configured.
    fn base_url(&self) -> &str;

    /// Fetches `GET {base_url}/meta`.
    async fn meta(&self) -> Result<Meta, ApiError>;
}

/// The main HTTP client for talking to a GitHub API endpoint.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use github_product::api::GitHubClient;
///
/// // GitHub.com
/// let cloud = GitHubClient::cloud()?;
///
/// // GitHub Enterprise Server
/// let server = GitHubClient::new("https://github.acme.com/api/v3")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Authentication
///
/// ```rust,no_run
/// use github_product::api::GitHubClient;
/// use github_product::auth::AuthCredential;
///
/// let client = GitHubClient::cloud()?
///     .with_auth(AuthCredential::token("ghp_example"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct GitHubClient {
    /// The underlying HTTP client
    http: Client,
    /// The API base URL exactly as configured
    base_url: String,
    /// Optional authentication credentials
    auth: Option<AuthCredential>,
}

impl GitHubClient {
    /// Creates a client bound to `base_url`.
    ///
    /// The URL is stored as given; [`MetaApi::base_url`] returns it unchanged
    /// so classification sees exactly what was configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client could not be created.
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        Ok(Self {
            http: Client::builder()
                .user_agent(format!("ghp/{}", crate::VERSION))
                .default_headers(headers)
                .build()?,
            base_url: base_url.into(),
            auth: None,
        })
    }

    /// Creates a client for GitHub.com at `https://api.github.com`.
    pub fn cloud() -> anyhow::Result<Self> {
        Self::new(GITHUB_API_URL)
    }

    /// Creates a client from a host configuration.
    ///
    /// Uses the configured `api_url` when set, otherwise derives it from the
    /// host name with [`api_url_for_host`]. A configured token is applied.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use github_product::api::{GitHubClient, MetaApi};
    /// use github_product::config::HostConfig;
    ///
    /// let config = HostConfig {
    ///     host: "github.acme.com".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let client = GitHubClient::from_config(&config)?;
    /// assert_eq!(client.base_url(), "https://github.acme.com/api/v3");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_config(config: &HostConfig) -> anyhow::Result<Self> {
        let base_url = config
            .api_url
            .clone()
            .unwrap_or_else(|| api_url_for_host(&config.host));

        let client = Self::new(base_url)?;
        Ok(match &config.token {
            Some(token) => client.with_auth(AuthCredential::token(token)),
            None => client,
        })
    }

    /// Sets the authentication credentials for this client.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Joins `path` onto the base URL.
    ///
    /// A trailing slash on the base URL is dropped so `https://host/api/v3/`
    /// and `https://host/api/v3` produce the same request URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Makes an HTTP GET request to the specified path.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the request fails or the body cannot be decoded
    /// - A status-specific variant if the response is not 2xx
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut request = self.http.get(&url);

        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }

        tracing::debug!("GET {}", url);
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let rate_limit_exhausted = response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|remaining| remaining.as_bytes() == b"0");
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &text, rate_limit_exhausted));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MetaApi for GitHubClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn meta(&self) -> Result<Meta, ApiError> {
        self.get("/meta").await
    }
}
