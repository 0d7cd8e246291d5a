// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The fixed set of XML parts which make up a minimal SpreadsheetML package.

use crate::entry::ZipEntry;
use crate::error::Result;
use crate::xlsx::{escape, Workbook, Worksheet};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PATH: &str = "_rels/.rels";
pub const WORKBOOK_PATH: &str = "xl/workbook.xml";
pub const WORKBOOK_RELS_PATH: &str = "xl/_rels/workbook.xml.rels";
pub const WORKSHEET_PATH: &str = "xl/worksheets/sheet1.xml";

/// The sheet name used when a workbook has no worksheets at all.
const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Builds the five package parts for the given workbook, in the order they're stored.
///
/// Only the first worksheet is serialised; any further worksheets are reported and skipped.
pub(crate) fn build_parts(workbook: &Workbook) -> Result<Vec<ZipEntry>> {
    let worksheet = workbook.worksheets().first();

    if let Some((_, ignored)) = workbook.worksheets().split_first() {
        if !ignored.is_empty() {
            let names: Vec<&str> = ignored.iter().map(Worksheet::name).collect();
            tracing::warn!(?names, "only the first worksheet is written; ignoring the rest");
        }
    }

    let sheet_name = worksheet.map(Worksheet::name).unwrap_or(DEFAULT_SHEET_NAME);

    Ok(vec![
        ZipEntry::new(CONTENT_TYPES_PATH, content_types()),
        ZipEntry::new(PACKAGE_RELS_PATH, package_rels()),
        ZipEntry::new(WORKBOOK_PATH, workbook_xml(sheet_name)?),
        ZipEntry::new(WORKBOOK_RELS_PATH, workbook_rels()),
        ZipEntry::new(WORKSHEET_PATH, worksheet_xml(worksheet)?),
    ])
}

fn content_types() -> String {
    format!(
        r#"{XML_DECLARATION}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/{WORKBOOK_PATH}" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/{WORKSHEET_PATH}" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#
    )
}

fn package_rels() -> String {
    format!(
        r#"{XML_DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="{WORKBOOK_PATH}"/>
</Relationships>"#
    )
}

fn workbook_xml(sheet_name: &str) -> Result<String> {
    let sheet_name = escape::attribute("sheet name", sheet_name)?;

    Ok(format!(
        r#"{XML_DECLARATION}
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="{sheet_name}" sheetId="1" r:id="rId1"/>
  </sheets>
</workbook>"#
    ))
}

fn workbook_rels() -> String {
    format!(
        r#"{XML_DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#
    )
}

fn worksheet_xml(worksheet: Option<&Worksheet>) -> Result<String> {
    let mut sheet_data = String::new();

    for (row_index, row) in worksheet.map(Worksheet::rows).unwrap_or_default().iter().enumerate() {
        let row_number = row_index + 1;
        sheet_data.push_str(&format!("\n    <row r=\"{row_number}\">"));

        for (column_index, cell) in row.iter().enumerate() {
            let reference = format!("{}{row_number}", column_letters(column_index));
            sheet_data.push_str(&cell.to_xml(&reference)?);
        }

        sheet_data.push_str("</row>");
    }

    Ok(format!(
        r#"{XML_DECLARATION}
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>{sheet_data}
  </sheetData>
</worksheet>"#
    ))
}

/// Converts a 0-based column index into its spreadsheet column letters (0 -> A, 25 -> Z, 26 -> AA).
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;

    while remaining > 0 {
        remaining -= 1;
        letters.push(b'A' + (remaining % 26) as u8);
        remaining /= 26;
    }

    letters.iter().rev().map(|letter| *letter as char).collect()
}
