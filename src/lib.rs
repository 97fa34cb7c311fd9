//
//  github-product
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GitHub Product Detection Library
//!
//! Determines whether a GitHub API endpoint is GitHub.com, GHE.com (GitHub
//! Enterprise Cloud with data residency), or a self-managed GitHub Enterprise
//! Server, and for the latter which version is installed. The result gates
//! features that only exist from a given server release onwards.
//!
//! ## Module Structure
//!
//! - [`product`]: Classification, version resolution and capability checks
//! - [`api`]: HTTP client and the `/meta` endpoint
//! - [`auth`]: Request credentials
//! - [`config`]: Configuration file and host helpers
//! - [`diagnostics`]: Debug logging seam used by the resolver
//! - [`output`]: Table and JSON output for the `ghp` binary
//! - [`cli`]: Command-line interface definitions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use github_product::api::GitHubClient;
//! use github_product::diagnostics::NoopLogger;
//! use github_product::product::{resolve_product, supports_status_field_migration};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new("https://github.acme.com/api/v3")?;
//! let info = resolve_product(&client, &NoopLogger).await?;
//!
//! if !supports_status_field_migration(info.product(), info.version()) {
//!     println!("Upgrade to GitHub Enterprise Server 3.17 to migrate Status fields");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Product Differences
//!
//! | | GitHub.com | GHE.com | GHES |
//! |---|---|---|---|
//! | Versioned | No | No | Yes |
//! | `installed_version` in `/meta` | No | No | Yes |
//! | Gated features | Always on | Always on | From minimum version |

/// Command-line interface definitions.
pub mod cli;

/// GitHub REST API client.
pub mod api;

/// Authentication credentials.
pub mod auth;

/// Configuration file management.
///
/// - Linux: `~/.config/ghp/config.toml`
/// - macOS: `~/Library/Application Support/ghp/config.toml`
/// - Windows: `%APPDATA%\ghp\config.toml`
pub mod config;

/// Debug logging used while resolving a product.
pub mod diagnostics;

/// Output formatting for the `ghp` binary.
pub mod output;

/// Product classification, version resolution and capability gates.
pub mod product;

pub use cli::Cli;
pub use config::Config;
pub use product::{Product, ProductInfo};

/// Application name, used for the binary and configuration paths.
pub const APP_NAME: &str = "ghp";

/// Crate version, taken from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// ```rust,no_run
/// use github_product::exit_codes;
///
/// std::process::exit(exit_codes::CAPABILITY_UNAVAILABLE);
/// ```
pub mod exit_codes {
    /// The command completed and, for `check`, the capability is available.
    pub const SUCCESS: i32 = 0;

    /// An error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// `check` ran successfully but the capability is not available.
    pub const CAPABILITY_UNAVAILABLE: i32 = 3;
}
