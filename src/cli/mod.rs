//
//  github-product
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod check;
mod detect;

pub use check::CheckCommand;
pub use detect::DetectCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::GitHubClient;
use crate::auth::AuthCredential;
use crate::config::{Config, GITHUB_COM};

/// Detect which GitHub product an endpoint runs and what it supports
#[derive(Parser, Debug)]
#[command(
    name = "ghp",
    version,
    about = "Detect GitHub.com, GHE.com and GitHub Enterprise Server endpoints",
    long_about = "ghp tells you which GitHub product an API endpoint belongs to.\n\n\
                  For GitHub Enterprise Server it reads the installed version and \
                  reports which version-gated features are available.",
    propagate_version = true,
    after_help = "Use 'ghp <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// GitHub host name, e.g. github.com or github.acme.com
    #[arg(long, global = true, env = "GH_HOST")]
    pub hostname: Option<String>,

    /// API base URL; takes precedence over --hostname
    #[arg(long, global = true, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds an API client for the selected endpoint.
    ///
    /// Resolution order: `--api-url`, then `--hostname`, then the configured
    /// default host, then GitHub.com. A token from `GH_TOKEN`/`GITHUB_TOKEN`
    /// overrides one stored in the configuration.
    pub fn client(&self) -> Result<GitHubClient> {
        self.client_with(Config::load)
    }

    /// Like [`client`](Self::client), loading the configuration through
    /// `load_config` only when no `--api-url` was given.
    fn client_with<F>(&self, load_config: F) -> Result<GitHubClient>
    where
        F: FnOnce() -> Result<Config>,
    {
        let client = match &self.api_url {
            Some(api_url) => GitHubClient::new(api_url.as_str())?,
            None => {
                let config = load_config()?;
                let host = self
                    .hostname
                    .as_deref()
                    .or(config.default_host.as_deref())
                    .unwrap_or(GITHUB_COM);
                GitHubClient::from_config(&config.host_config_or_default(host))?
            }
        };

        Ok(match AuthCredential::from_env() {
            Some(auth) => client.with_auth(auth),
            None => client,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the product and version behind the endpoint
    Detect(DetectCommand),

    /// Check whether a version-gated capability is available
    Check(CheckCommand),

    /// Print the ghp version
    Version,
}
