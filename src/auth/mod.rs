//
//  github-product
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials attached to GitHub API requests.
//!
//! `GET /meta` is readable anonymously on most installations, so credentials
//! are optional. Servers running in private mode require a token: a personal
//! access token, a fine-grained token, or a GitHub App installation token,
//! sent as a bearer token.
//!
//! ## Sources
//!
//! - [`AuthCredential::from_env`] reads `GH_TOKEN`, then `GITHUB_TOKEN`
//! - `token` in a host entry of the configuration file

use reqwest::RequestBuilder;

/// Environment variables consulted for a token, in order.
pub const TOKEN_ENV_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];

/// A bearer token for a GitHub API endpoint.
#[derive(Clone)]
pub struct AuthCredential {
    token: String,
}

impl AuthCredential {
    /// Creates a bearer token credential.
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Reads a token from the environment.
    ///
    /// Returns the first non-empty value of [`TOKEN_ENV_VARS`], or `None`.
    pub fn from_env() -> Option<Self> {
        TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(Self::token)
    }

    /// Adds the `Authorization: Bearer` header to `request`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

// Keeps secrets out of debug logs.
impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredential")
            .field("token", &"***")
            .finish()
    }
}
