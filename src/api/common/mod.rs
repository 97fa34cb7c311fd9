//
//  github-product
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Common API Types
//!
//! Types shared by every GitHub API flavour:
//!
//! - [`ApiError`]: Errors returned by [`GitHubClient`](super::GitHubClient)
//! - [`Meta`]: The response of `GET /meta`
//!
//! ## Error Mapping
//!
//! | Status | Variant |
//! |--------|---------|
//! | 401 | [`ApiError::AuthRequired`] |
//! | 403 (rate limit headers exhausted) | [`ApiError::RateLimited`] |
//! | 403 | [`ApiError::Forbidden`] |
//! | 404 | [`ApiError::NotFound`] |
//! | 429 | [`ApiError::RateLimited`] |
//! | 5xx | [`ApiError::ServerError`] |
//! | other | [`ApiError::Api`] |

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while talking to a GitHub API.
///
/// Implements `std::error::Error` via `thiserror`, so it converts into
/// `anyhow::Error` with `?`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request needs credentials (HTTP 401).
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// The credentials lack permission for the resource (HTTP 403).
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The resource does not exist or is hidden (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The API rate limit is exhausted (HTTP 429, or 403 with no requests remaining).
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The server failed to handle the request (HTTP 5xx).
    #[error("Server error: {0}")]
    ServerError(String),

    /// Any other unsuccessful status.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code
        status: StatusCode,
        /// The error message from the response body
        message: String,
    },

    /// Connection, TLS, timeout, or response decoding failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response decoded but lacked a field the caller requires.
    #[error("Response is missing the `{0}` field")]
    MissingField(&'static str),
}

impl ApiError {
    /// Builds an error from an unsuccessful response.
    ///
    /// GitHub reports errors as `{"message": "...", "documentation_url": "..."}`.
    /// The message is used when present, otherwise the raw body.
    ///
    /// # Parameters
    ///
    /// * `status` - The HTTP status code
    /// * `body` - The raw response body
    /// * `rate_limit_exhausted` - Whether `x-ratelimit-remaining` was `0`
    ///
    /// # Example
    ///
    /// ```rust
    /// use github_product::api::ApiError;
    /// use reqwest::StatusCode;
    ///
    /// let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"message": "Not Found"}"#, false);
    /// assert_eq!(err.to_string(), "Resource not found: Not Found");
    /// ```
    pub fn from_response(status: StatusCode, body: &str, rate_limit_exhausted: bool) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            StatusCode::UNAUTHORIZED => Self::AuthRequired(message),
            StatusCode::FORBIDDEN if rate_limit_exhausted => Self::RateLimited,
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            s if s.is_server_error() => Self::ServerError(message),
            _ => Self::Api { status, message },
        }
    }
}

/// Response of `GET /meta`.
///
/// GitHub Enterprise Server includes `installed_version`; GitHub.com and
/// GHE.com do not. Other fields of the response are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// The installed GitHub Enterprise Server version, e.g. `"3.17.2"`
    #[serde(default)]
    pub installed_version: Option<String>,
}
