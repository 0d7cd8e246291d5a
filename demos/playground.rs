// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Builds a small workbook and writes it to disk.
//!
//! Usage: `cargo run --example playground -- [OUTPUT]` (defaults to `generated/output.xlsx`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use xlsx_pack::{Cell, Workbook, XlsxBuilder};

fn main() -> Result<()> {
    let output = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("generated/output.xlsx"));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet("Sheet1");
    sheet.add_row([Cell::from("Hello"), Cell::from("World")]);
    sheet.add_row([Cell::from("Answer"), Cell::from(42)]);

    let file = XlsxBuilder::new(&workbook).build().context("failed to build workbook")?;

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, &file).with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {} bytes to {}", file.len(), output.display());
    Ok(())
}
