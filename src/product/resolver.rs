//
//  github-product
//  product/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Product Resolver
//!
//! Combines base URL classification with the installed version lookup.
//!
//! Only GitHub Enterprise Server endpoints are contacted: for GitHub.com and
//! GHE.com the result is built from the base URL alone. When the server's
//! `/meta` endpoint cannot be read the whole resolution fails; there is no
//! "unknown version" result.

use crate::api::{ApiError, MetaApi};
use crate::diagnostics::DebugLogger;

use super::{classify_base_url, Product, ProductInfo};

/// Fetches the installed GitHub Enterprise Server version.
///
/// Issues a single `GET /meta` through `client` and returns its
/// `installed_version` field verbatim.
///
/// # Errors
///
/// - Any transport, status, or decoding error from the client, unchanged
/// - [`ApiError::MissingField`] if the response has no `installed_version`,
///   which is the case for GitHub.com and GHE.com
pub async fn fetch_installed_version<C>(client: &C) -> Result<String, ApiError>
where
    C: MetaApi + ?Sized,
{
    let meta = client.meta().await?;
    meta.installed_version
        .ok_or(ApiError::MissingField("installed_version"))
}

/// Resolves the product behind `client` and, for GitHub Enterprise Server,
/// its installed version.
///
/// # Parameters
///
/// * `client` - An API client bound to the endpoint to inspect
/// * `logger` - Receives a debug message at each decision point
///
/// # Errors
///
/// Only GitHub Enterprise Server resolution can fail; see
/// [`fetch_installed_version`].
///
/// # Example
///
/// ```rust,no_run
/// use github_product::api::GitHubClient;
/// use github_product::diagnostics::NoopLogger;
/// use github_product::product::{resolve_product, ProductInfo};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GitHubClient::cloud()?;
/// let info = resolve_product(&client, &NoopLogger).await?;
/// assert_eq!(info, ProductInfo::Cloud);
/// # Ok(())
/// # }
/// ```
pub async fn resolve_product<C>(client: &C, logger: &dyn DebugLogger) -> Result<ProductInfo, ApiError>
where
    C: MetaApi + ?Sized,
{
    let base_url = client.base_url();
    logger.debug(&format!("Resolving GitHub product for base URL {}", base_url));

    let product = classify_base_url(base_url);
    logger.debug(&format!("Classified {} as {}", base_url, product));

    let info = match product {
        Product::Cloud => ProductInfo::Cloud,
        Product::CloudWithDataResidency => ProductInfo::CloudWithDataResidency,
        Product::SelfManaged => {
            let version = fetch_installed_version(client).await?;
            logger.debug(&format!("GitHub Enterprise Server version is {}", version));
            ProductInfo::SelfManaged { version }
        }
    };

    Ok(info)
}
