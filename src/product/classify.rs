//
//  github-product
//  product/classify.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Base URL classification.
//!
//! Maps an API base URL to a [`Product`] without touching the network.
//! The rules are applied in order and the first match wins:
//!
//! 1. Exactly `https://api.github.com` is GitHub.com.
//! 2. A URL whose host is `api.<label>.ghe.com` is GHE.com.
//! 3. Everything else, including strings that are not URLs, is GitHub
//!    Enterprise Server.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::Product;
use crate::config::GITHUB_API_URL;

/// Host pattern for GHE.com tenants.
///
/// Exactly one alphanumeric/hyphen label between `api.` and `.ghe.com`.
/// `api.ghe.com` and `foo.api.bar.ghe.com` do not match.
static GHE_COM_HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^api\.[a-zA-Z0-9-]+\.ghe\.com$").unwrap()
});

/// Classifies an API base URL.
///
/// # Parameters
///
/// * `base_url` - The API base URL the client is configured with
///
/// # Returns
///
/// The detected [`Product`]. Never fails: a URL that cannot be parsed is
/// treated as GitHub Enterprise Server.
///
/// # Examples
///
/// ```rust
/// use github_product::product::{classify_base_url, Product};
///
/// assert_eq!(classify_base_url("https://api.github.com"), Product::Cloud);
/// assert_eq!(
///     classify_base_url("https://api.acme-corp.ghe.com"),
///     Product::CloudWithDataResidency
/// );
/// assert_eq!(
///     classify_base_url("https://github.acme.com/api/v3"),
///     Product::SelfManaged
/// );
/// assert_eq!(classify_base_url("not a url"), Product::SelfManaged);
/// ```
///
/// # Notes
///
/// - The GitHub.com check is an exact string comparison, so a trailing slash
///   or a path makes it fall through to the other rules
/// - Hosts are lowercased by URL parsing before the GHE.com pattern is applied
pub fn classify_base_url(base_url: &str) -> Product {
    if base_url == GITHUB_API_URL {
        return Product::Cloud;
    }

    if is_ghe_com_url(base_url) {
        return Product::CloudWithDataResidency;
    }

    Product::SelfManaged
}

/// Returns `true` if `base_url` parses as a URL whose host is a GHE.com API host.
fn is_ghe_com_url(base_url: &str) -> bool {
    Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(|host| GHE_COM_HOST_PATTERN.is_match(host)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_com() {
        assert_eq!(classify_base_url("https://api.github.com"), Product::Cloud);
    }

    #[test]
    fn test_github_com_requires_exact_match() {
        assert_eq!(classify_base_url("https://api.github.com/"), Product::SelfManaged);
        assert_eq!(classify_base_url("http://api.github.com"), Product::SelfManaged);
    }

    #[test]
    fn test_ghe_com_tenants() {
        for url in [
            "https://api.acme-corp.ghe.com",
            "https://api.octo.ghe.com/",
            "https://api.tenant42.ghe.com/some/path",
            "https://API.Acme.GHE.com",
        ] {
            assert_eq!(classify_base_url(url), Product::CloudWithDataResidency, "{}", url);
        }
    }

    #[test]
    fn test_ghe_com_lookalikes_are_self_managed() {
        for url in [
            "https://api.ghe.com",
            "https://foo.api.bar.ghe.com",
            "https://api.a.b.ghe.com",
            "https://api.acme.ghe.com.evil.net",
            "https://acme.ghe.com",
            "https://api.acme_corp.ghe.com",
        ] {
            assert_eq!(classify_base_url(url), Product::SelfManaged, "{}", url);
        }
    }

    #[test]
    fn test_enterprise_server() {
        assert_eq!(
            classify_base_url("https://github.acme.com/api/v3"),
            Product::SelfManaged
        );
        assert_eq!(classify_base_url("http://127.0.0.1:8080"), Product::SelfManaged);
    }

    #[test]
    fn test_unparseable_is_self_managed() {
        for input in ["", "not a url", "api.acme.ghe.com", "https://", "://api.x.ghe.com"] {
            assert_eq!(classify_base_url(input), Product::SelfManaged, "{:?}", input);
        }
    }
}
