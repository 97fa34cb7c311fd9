//
//  github-product
//  cli/detect.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `ghp detect`: report the product, version and gated capabilities of an endpoint.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::api::MetaApi;
use crate::diagnostics::TracingLogger;
use crate::output::{KeyValueTable, OutputWriter, TableOutput};
use crate::product::{resolve_product, Capability, Product};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct DetectCommand {}

#[derive(Debug, Serialize)]
struct DetectReport {
    base_url: String,
    product: Product,
    version: Option<String>,
    capabilities: Vec<CapabilityStatus>,
}

#[derive(Debug, Serialize)]
struct CapabilityStatus {
    capability: Capability,
    min_version: &'static str,
    supported: bool,
}

impl TableOutput for DetectReport {
    fn print_table(&self, color: bool) {
        let mut table = KeyValueTable::new(color)
            .row("API URL", self.base_url.as_str())
            .row("Product", self.product.display_name())
            .row("Version", self.version.as_deref().unwrap_or("-"));
        for status in &self.capabilities {
            let key = format!("{} (>= {})", status.capability, status.min_version);
            table = table.bool_row(&key, status.supported);
        }
        table.print();
    }
}

impl DetectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let info = resolve_product(&client, &TracingLogger)
            .await
            .with_context(|| format!("Failed to resolve GitHub product for {}", client.base_url()))?;

        let report = DetectReport {
            base_url: client.base_url().to_string(),
            product: info.product(),
            version: info.version().map(str::to_string),
            capabilities: Capability::ALL
                .iter()
                .map(|capability| CapabilityStatus {
                    capability: *capability,
                    min_version: capability.min_version(),
                    supported: capability.is_supported(&info),
                })
                .collect(),
        };

        OutputWriter::from_flag(global.json).write(&report)
    }
}
