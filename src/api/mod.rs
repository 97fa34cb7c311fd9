//
//  github-product
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP access to the GitHub REST API.
//!
//! ## Supported Endpoints
//!
//! - **GitHub.com**: `https://api.github.com`
//! - **GHE.com**: `https://api.<tenant>.ghe.com`
//! - **GitHub Enterprise Server**: `https://<host>/api/v3`
//!
//! ## Architecture
//!
//! - [`client`]: The [`GitHubClient`] and the [`MetaApi`] trait
//! - [`common`]: [`ApiError`] and response types such as [`Meta`]

/// Core HTTP client and the metadata seam used by the product resolver.
pub mod client;

/// Error and response types shared by all endpoints.
pub mod common;

pub use client::{GitHubClient, MetaApi};
pub use common::{ApiError, Meta};
