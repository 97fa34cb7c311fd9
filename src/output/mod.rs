//
//  github-product
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders command results either as human-readable tables or as JSON.
//!
//! - [`table`]: Key/value tables using `comfy_table`
//! - [`json`]: JSON serialization using `serde_json`

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// Output formats supported by `ghp`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Types that can print themselves as a table.
pub trait TableOutput {
    /// Prints the value as a table to stdout.
    fn print_table(&self, color: bool);
}

/// Writes values in the selected [`OutputFormat`].
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Picks JSON when `json` is set, otherwise a table.
    pub fn from_flag(json: bool) -> Self {
        Self::new(if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }

    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }
}
