//
//  github-product
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Host Utilities
//!
//! Constants for GitHub.com and helpers that turn a web host name into the
//! API base URL GitHub serves it from.
//!
//! | Host | API base URL |
//! |------|--------------|
//! | `github.com` | `https://api.github.com` |
//! | `<tenant>.ghe.com` | `https://api.<tenant>.ghe.com` |
//! | anything else | `https://<host>/api/v3` |
//!
//! ## Usage
//!
//! ```rust
//! use github_product::config::{api_url_for_host, normalize_host};
//!
//! let host = normalize_host("https://GitHub.Acme.com/");
//! assert_eq!(host, "github.acme.com");
//! assert_eq!(api_url_for_host(&host), "https://github.acme.com/api/v3");
//! ```

/// The web host name of GitHub.com.
pub const GITHUB_COM: &str = "github.com";

/// The API base URL of GitHub.com.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Host suffix of GHE.com tenants.
pub const GHE_COM_SUFFIX: &str = ".ghe.com";

/// Returns `true` for the GitHub.com web or API host.
pub fn is_github_com(host: &str) -> bool {
    host == GITHUB_COM || host == "api.github.com"
}

/// Derives the API base URL for a web host name.
///
/// # Examples
///
/// ```rust
/// use github_product::config::api_url_for_host;
///
/// assert_eq!(api_url_for_host("github.com"), "https://api.github.com");
/// assert_eq!(api_url_for_host("octo.ghe.com"), "https://api.octo.ghe.com");
/// assert_eq!(api_url_for_host("git.corp.net"), "https://git.corp.net/api/v3");
/// ```
///
/// # Notes
///
/// - Input is normalized with [`normalize_host`] first
/// - A host already starting with `api.` under `.ghe.com` is kept as is
pub fn api_url_for_host(host: &str) -> String {
    let host = normalize_host(host);

    if is_github_com(&host) {
        return GITHUB_API_URL.to_string();
    }

    if host.ends_with(GHE_COM_SUFFIX) {
        if host.starts_with("api.") {
            return format!("https://{}", host);
        }
        return format!("https://api.{}", host);
    }

    format!("https://{}/api/v3", host)
}

/// Normalizes a host name for comparison and storage.
///
/// Trims whitespace, lowercases, then strips an `https://` or `http://`
/// prefix and a trailing slash.
///
/// ```rust
/// use github_product::config::normalize_host;
///
/// assert_eq!(normalize_host("  HTTPS://GitHub.com/  "), "github.com");
/// ```
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().to_lowercase();
    let host = host.strip_prefix("https://").unwrap_or(&host);
    let host = host.strip_prefix("http://").unwrap_or(host);
    let host = host.strip_suffix('/').unwrap_or(host);
    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_for_host() {
        assert_eq!(api_url_for_host("github.com"), GITHUB_API_URL);
        assert_eq!(api_url_for_host("https://api.github.com/"), GITHUB_API_URL);
        assert_eq!(api_url_for_host("acme.ghe.com"), "https://api.acme.ghe.com");
        assert_eq!(api_url_for_host("api.acme.ghe.com"), "https://api.acme.ghe.com");
        assert_eq!(
            api_url_for_host("GITHUB.ACME.COM"),
            "https://github.acme.com/api/v3"
        );
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("http://github.com"), "github.com");
        assert_eq!(normalize_host("github.com/"), "github.com");
    }

    #[test]
    fn test_normalize_host_uppercase_scheme() {
        assert_eq!(normalize_host("  HTTPS://GitHub.com/  "), "github.com");
        assert_eq!(normalize_host("Http://GitHub.Acme.com"), "github.acme.com");
        assert_eq!(
            api_url_for_host("HTTPS://github.acme.com"),
            "https://github.acme.com/api/v3"
        );
    }
}
