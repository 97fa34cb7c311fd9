//
//  github-product
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the `ghp` configuration file and exposes host helpers.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/ghp/config.toml`
//! - **macOS**: `~/Library/Application Support/ghp/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\ghp\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! default_host = "github.acme.com"
//!
//! [hosts."github.acme.com"]
//! host = "github.acme.com"
//! api_url = "https://github.acme.com/api/v3"
//! token = "ghp_example"
//! ```
//!
//! ## Submodules
//!
//! - [`hosts`]: Host constants and API URL derivation

mod hosts;

pub use hosts::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Global configuration for `ghp`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Host used when neither `--hostname` nor `--api-url` is given
    #[serde(default)]
    pub default_host: Option<String>,

    /// Per-host settings keyed by normalized host name
    #[serde(default)]
    pub hosts: HashMap<String, HostConfig>,
}

/// Settings for a single GitHub host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostConfig {
    /// The web host name, e.g. `github.acme.com`; the table key when omitted
    #[serde(default)]
    pub host: String,

    /// Explicit API base URL; derived from `host` when absent
    #[serde(default)]
    pub api_url: Option<String>,

    /// Token sent with requests to this host
    #[serde(default)]
    pub token: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or the default if it does not exist.
    ///
    /// Host table keys are normalized with [`normalize_host`], and an entry
    /// without a `host` field takes its normalized key.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.hosts = self
            .hosts
            .into_iter()
            .map(|(key, mut host)| {
                let key = normalize_host(&key);
                host.host = if host.host.trim().is_empty() {
                    key.clone()
                } else {
                    normalize_host(&host.host)
                };
                (key, host)
            })
            .collect();
        self
    }

    /// Returns the path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the settings for `host`, matching on the normalized name.
    pub fn host_config(&self, host: &str) -> Option<&HostConfig> {
        self.hosts.get(&normalize_host(host))
    }

    /// Returns the settings for `host`, or a bare entry if none are stored.
    ///
    /// The returned `host` is never empty.
    pub fn host_config_or_default(&self, host: &str) -> HostConfig {
        let key = normalize_host(host);
        let mut config = self.hosts.get(&key).cloned().unwrap_or_default();
        if config.host.trim().is_empty() {
            config.host = key;
        }
        config
    }
}
