//
//  github-product
//  cli/check.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `ghp check`: answer whether one capability is available.
//!
//! Exits with [`CAPABILITY_UNAVAILABLE`](crate::exit_codes::CAPABILITY_UNAVAILABLE)
//! when it is not, so scripts can branch on the exit code alone.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::api::MetaApi;
use crate::diagnostics::TracingLogger;
use crate::exit_codes;
use crate::output::{KeyValueTable, OutputWriter, TableOutput};
use crate::product::{resolve_product, Capability, Product};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Capability to check
    #[arg(long, short = 'c', default_value = "status-field-migration")]
    pub capability: Capability,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    base_url: String,
    product: Product,
    version: Option<String>,
    capability: Capability,
    min_version: &'static str,
    supported: bool,
}

impl TableOutput for CheckReport {
    fn print_table(&self, color: bool) {
        KeyValueTable::new(color)
            .row("API URL", self.base_url.as_str())
            .row("Product", self.product.display_name())
            .row("Version", self.version.as_deref().unwrap_or("-"))
            .row("Capability", self.capability.as_str())
            .row("Minimum version", self.min_version)
            .bool_row("Supported", self.supported)
            .print();
    }
}

impl CheckCommand {
    /// Runs the check and returns the process exit code.
    pub async fn run(&self, global: &GlobalOptions) -> Result<i32> {
        let client = global.client()?;

        let info = resolve_product(&client, &TracingLogger)
            .await
            .with_context(|| format!("Failed to resolve GitHub product for {}", client.base_url()))?;

        let supported = self.capability.is_supported(&info);
        tracing::debug!("{} supported: {}", self.capability, supported);

        let report = CheckReport {
            base_url: client.base_url().to_string(),
            product: info.product(),
            version: info.version().map(str::to_string),
            capability: self.capability,
            min_version: self.capability.min_version(),
            supported,
        };
        OutputWriter::from_flag(global.json).write(&report)?;

        Ok(if supported {
            exit_codes::SUCCESS
        } else {
            exit_codes::CAPABILITY_UNAVAILABLE
        })
    }
}
