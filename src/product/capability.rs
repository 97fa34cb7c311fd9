//
//  github-product
//  product/capability.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Version-Gated Capabilities
//!
//! Some GitHub features only exist on GitHub Enterprise Server from a given
//! release onwards. This module publishes the minimum version for each such
//! capability and answers whether a resolved endpoint has it.
//!
//! ## Fail-Closed Rules
//!
//! | Product | Version | Result |
//! |---------|---------|--------|
//! | GitHub.com / GHE.com | any | `true` |
//! | GHES | absent | `false` |
//! | GHES | not semver | `false` |
//! | GHES | valid | `version >= minimum` |
//!
//! Uncertainty about the version always resolves to "not available".

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::Serialize;

use super::{Product, ProductInfo};

/// Minimum GitHub Enterprise Server version that migrates the project
/// `Status` field automatically.
pub const STATUS_FIELD_MIGRATION_MIN_VERSION: &str = "3.17.0";

/// A platform capability whose availability depends on the server version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Automatic migration of the project workflow `Status` field.
    StatusFieldMigration,
}

impl Capability {
    /// All known capabilities.
    pub const ALL: &'static [Capability] = &[Capability::StatusFieldMigration];

    /// Returns the minimum GitHub Enterprise Server version for this capability.
    ///
    /// # Example
    ///
    /// ```rust
    /// use github_product::product::{Capability, STATUS_FIELD_MIGRATION_MIN_VERSION};
    ///
    /// assert_eq!(
    ///     Capability::StatusFieldMigration.min_version(),
    ///     STATUS_FIELD_MIGRATION_MIN_VERSION
    /// );
    /// ```
    pub fn min_version(&self) -> &'static str {
        match self {
            Self::StatusFieldMigration => STATUS_FIELD_MIGRATION_MIN_VERSION,
        }
    }

    /// Returns the kebab-case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatusFieldMigration => "status-field-migration",
        }
    }

    /// Checks whether a resolved endpoint has this capability.
    ///
    /// # Example
    ///
    /// ```rust
    /// use github_product::product::{Capability, ProductInfo};
    ///
    /// let old = ProductInfo::SelfManaged { version: "3.14.0".to_string() };
    /// assert!(!Capability::StatusFieldMigration.is_supported(&old));
    /// assert!(Capability::StatusFieldMigration.is_supported(&ProductInfo::Cloud));
    /// ```
    pub fn is_supported(&self, info: &ProductInfo) -> bool {
        meets_minimum_version(info.product(), info.version(), self.min_version())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .copied()
            .find(|capability| capability.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown capability: {}", s))
    }
}

/// Checks a product/version pair against a minimum version.
///
/// # Parameters
///
/// * `product` - The resolved product
/// * `version` - The installed version, if known
/// * `minimum` - The minimum semantic version required
///
/// # Returns
///
/// - `true` for GitHub.com and GHE.com regardless of `version`
/// - `false` for GitHub Enterprise Server without a version
/// - `false` if either `version` or `minimum` is not a semantic version
/// - otherwise `version >= minimum`
///
/// # Examples
///
/// ```rust
/// use github_product::product::{meets_minimum_version, Product};
///
/// assert!(meets_minimum_version(Product::Cloud, None, "3.17.0"));
/// assert!(meets_minimum_version(Product::SelfManaged, Some("3.18.0"), "3.17.0"));
/// assert!(!meets_minimum_version(Product::SelfManaged, Some("3.16.9"), "3.17.0"));
/// assert!(!meets_minimum_version(Product::SelfManaged, None, "3.17.0"));
/// assert!(!meets_minimum_version(Product::SelfManaged, Some("not-a-version"), "3.17.0"));
/// ```
pub fn meets_minimum_version(product: Product, version: Option<&str>, minimum: &str) -> bool {
    match product {
        Product::Cloud | Product::CloudWithDataResidency => true,
        Product::SelfManaged => {
            let Some(version) = version else {
                return false;
            };
            match (Version::parse(version), Version::parse(minimum)) {
                (Ok(installed), Ok(required)) => installed >= required,
                _ => false,
            }
        }
    }
}

/// Checks whether the project `Status` field is migrated automatically.
///
/// Shorthand for [`meets_minimum_version`] against
/// [`STATUS_FIELD_MIGRATION_MIN_VERSION`].
pub fn supports_status_field_migration(product: Product, version: Option<&str>) -> bool {
    meets_minimum_version(product, version, STATUS_FIELD_MIGRATION_MIN_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_always_supported() {
        for product in [Product::Cloud, Product::CloudWithDataResidency] {
            assert!(supports_status_field_migration(product, None));
            assert!(supports_status_field_migration(product, Some("1.0.0")));
            assert!(supports_status_field_migration(product, Some("garbage")));
        }
    }

    #[test]
    fn test_self_managed_without_version() {
        assert!(!supports_status_field_migration(Product::SelfManaged, None));
    }

    #[test]
    fn test_self_managed_malformed_version() {
        for version in ["not-a-version", "", "3.17", "v3.17.0", " 3.17.0"] {
            assert!(
                !supports_status_field_migration(Product::SelfManaged, Some(version)),
                "{:?}",
                version
            );
        }
    }

    #[test]
    fn test_self_managed_threshold() {
        let check = |v| meets_minimum_version(Product::SelfManaged, Some(v), "3.17.0");
        assert!(check("3.17.0"));
        assert!(check("3.17.1"));
        assert!(check("3.18.0"));
        assert!(check("4.0.0"));
        assert!(!check("3.16.9"));
        assert!(!check("3.14.0"));
        assert!(!check("3.17.0-rc.1"));
    }

    #[test]
    fn test_malformed_minimum_fails_closed() {
        assert!(!meets_minimum_version(Product::SelfManaged, Some("3.17.0"), "latest"));
        assert!(meets_minimum_version(Product::Cloud, None, "latest"));
    }

    #[test]
    fn test_capability_from_str() {
        assert_eq!(
            "status-field-migration".parse::<Capability>().unwrap(),
            Capability::StatusFieldMigration
        );
        assert!("time-travel".parse::<Capability>().is_err());
    }

    #[test]
    fn test_capability_is_supported() {
        let capability = Capability::StatusFieldMigration;
        assert!(capability.is_supported(&ProductInfo::Cloud));
        assert!(capability.is_supported(&ProductInfo::CloudWithDataResidency));
        assert!(capability.is_supported(&ProductInfo::SelfManaged {
            version: "3.17.0".to_string()
        }));
        assert!(!capability.is_supported(&ProductInfo::SelfManaged {
            version: "3.16.9".to_string()
        }));
    }
}
