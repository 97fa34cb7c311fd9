//
//  github-product
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output for scripting.

use serde::Serialize;
use std::io::{self, Write};

/// Prints `value` as pretty JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to_appends_newline() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &serde_json::json!({"product": "ghes"})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"product\": \"ghes\""));
    }
}
