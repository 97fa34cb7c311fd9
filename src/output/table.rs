//
//  github-product
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Two-column key/value tables rendered with `comfy_table`.
//!
//! ```rust,ignore
//! use github_product::output::KeyValueTable;
//!
//! KeyValueTable::new(true)
//!     .row("Product", "ghes")
//!     .row("Version", "3.17.2")
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a table with the default preset and dynamic arrangement.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for a two-column key/value table.
pub struct KeyValueTable {
    table: Table,
    color: bool,
}

impl KeyValueTable {
    pub fn new(color: bool) -> Self {
        Self {
            table: create_table(),
            color,
        }
    }

    pub fn row(mut self, key: &str, value: impl Into<String>) -> Self {
        let key = if self.color {
            Cell::new(key).fg(Color::Cyan)
        } else {
            Cell::new(key)
        };
        self.table.add_row(vec![key, Cell::new(value.into())]);
        self
    }

    /// Adds a row rendered as `Yes`/`No`, green or red when colored.
    pub fn bool_row(mut self, key: &str, value: bool) -> Self {
        let text = format_bool(value);
        let cell = match (self.color, value) {
            (true, true) => Cell::new(text).fg(Color::Green),
            (true, false) => Cell::new(text).fg(Color::Red),
            (false, _) => Cell::new(text),
        };
        let key = if self.color {
            Cell::new(key).fg(Color::Cyan)
        } else {
            Cell::new(key)
        };
        self.table.add_row(vec![key, cell]);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }

    pub fn print(self) {
        println!("{}", self.build());
    }
}

/// Formats a boolean as `Yes` or `No`.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_table_renders_rows() {
        let rendered = KeyValueTable::new(false)
            .row("Product", "ghes")
            .bool_row("Supported", false)
            .build()
            .to_string();
        assert!(rendered.contains("Product"));
        assert!(rendered.contains("ghes"));
        assert!(rendered.contains("No"));
    }
}
