//
//  github-product
//  product/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GitHub Product Detection
//!
//! This module determines which flavour of GitHub an API endpoint belongs to and,
//! for GitHub Enterprise Server, which version is installed. Callers use the result
//! to decide whether a version-gated feature can be relied upon.
//!
//! ## Products
//!
//! | Product | API base | Version known |
//! |---------|----------|---------------|
//! | GitHub.com | `https://api.github.com` | No (always current) |
//! | GHE.com (data residency) | `https://api.<tenant>.ghe.com` | No (always current) |
//! | GitHub Enterprise Server | `https://<host>/api/v3` | Yes, from `GET /meta` |
//!
//! ## Submodules
//!
//! - [`classify`]: Pure base URL classification
//! - [`resolver`]: Classification plus the installed version lookup
//! - [`capability`]: Minimum version thresholds and the fail-closed capability check
//!
//! ## Example
//!
//! ```rust,no_run
//! use github_product::api::GitHubClient;
//! use github_product::diagnostics::TracingLogger;
//! use github_product::product::{resolve_product, Capability};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new("https://github.acme.com/api/v3")?;
//! let info = resolve_product(&client, &TracingLogger).await?;
//!
//! if Capability::StatusFieldMigration.is_supported(&info) {
//!     println!("{} supports status field migration", info.product());
//! }
//! # Ok(())
//! # }
//! ```

mod capability;
mod classify;
mod resolver;

pub use capability::*;
pub use classify::*;
pub use resolver::*;

use std::fmt;

use serde::Serialize;

/// The flavour of GitHub behind an API endpoint.
///
/// The set is closed: every caller matching on it must handle all three
/// products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Product {
    /// GitHub.com, served from `https://api.github.com`.
    #[serde(rename = "github.com")]
    Cloud,

    /// GitHub Enterprise Cloud with data residency, served from
    /// `https://api.<tenant>.ghe.com`.
    #[serde(rename = "ghe.com")]
    CloudWithDataResidency,

    /// GitHub Enterprise Server, versioned independently of the cloud.
    #[serde(rename = "ghes")]
    SelfManaged,
}

impl Product {
    /// Returns the short identifier used in output and configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use github_product::product::Product;
    ///
    /// assert_eq!(Product::Cloud.as_str(), "github.com");
    /// assert_eq!(Product::CloudWithDataResidency.as_str(), "ghe.com");
    /// assert_eq!(Product::SelfManaged.as_str(), "ghes");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cloud => "github.com",
            Self::CloudWithDataResidency => "ghe.com",
            Self::SelfManaged => "ghes",
        }
    }

    /// Returns a human-readable product name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cloud => "GitHub.com",
            Self::CloudWithDataResidency => "GitHub Enterprise Cloud (data residency)",
            Self::SelfManaged => "GitHub Enterprise Server",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of resolving an endpoint: its product and, for GitHub
/// Enterprise Server only, the installed version.
///
/// The version lives inside the `SelfManaged` variant, so a cloud result can
/// never carry one and a server result can never lack one.
///
/// # Example
///
/// ```rust
/// use github_product::product::{Product, ProductInfo};
///
/// let info = ProductInfo::SelfManaged { version: "3.14.0".to_string() };
/// assert_eq!(info.product(), Product::SelfManaged);
/// assert_eq!(info.version(), Some("3.14.0"));
///
/// assert_eq!(ProductInfo::Cloud.version(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductInfo {
    /// GitHub.com
    Cloud,
    /// GHE.com
    CloudWithDataResidency,
    /// GitHub Enterprise Server at the given installed version
    SelfManaged {
        /// The `installed_version` reported by `GET /meta`, verbatim
        version: String,
    },
}

impl ProductInfo {
    /// Returns the product this result describes.
    pub fn product(&self) -> Product {
        match self {
            Self::Cloud => Product::Cloud,
            Self::CloudWithDataResidency => Product::CloudWithDataResidency,
            Self::SelfManaged { .. } => Product::SelfManaged,
        }
    }

    /// Returns the installed version, present only for GitHub Enterprise Server.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::SelfManaged { version } => Some(version),
            Self::Cloud | Self::CloudWithDataResidency => None,
        }
    }
}

/// Serialised as `{"product": "...", "version": "..." | null}`.
impl Serialize for ProductInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ProductInfo", 2)?;
        state.serialize_field("product", &self.product())?;
        state.serialize_field("version", &self.version())?;
        state.end()
    }
}
