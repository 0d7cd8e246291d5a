// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which builds minimal XLSX packages.
//!
//! # Example
//! ```
//! # use xlsx_pack::xlsx::{Cell, Workbook, XlsxBuilder};
//! # use xlsx_pack::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet("Sheet1").add_row([Cell::from("Hello"), Cell::from(42)]);
//!
//! let file: Vec<u8> = XlsxBuilder::new(&workbook).build()?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod cell;
pub(crate) mod escape;
pub(crate) mod parts;
pub(crate) mod workbook;

pub use cell::Cell;
pub use parts::column_letters;
pub use workbook::{Workbook, Worksheet};

use chrono::Local;

use crate::date::ZipDateTime;
use crate::entry::ZipEntry;
use crate::error::Result;

/// Builds an XLSX file from a workbook.
pub struct XlsxBuilder<'a> {
    workbook: &'a Workbook,
}

impl<'a> XlsxBuilder<'a> {
    /// Constructs a new builder over the given workbook.
    pub fn new(workbook: &'a Workbook) -> Self {
        Self { workbook }
    }

    /// Returns the package parts which make up the XLSX file, without assembling them.
    pub fn parts(&self) -> Result<Vec<ZipEntry>> {
        parts::build_parts(self.workbook)
    }

    /// Builds the XLSX file, stamping every part with the current local time.
    pub fn build(&self) -> Result<Vec<u8>> {
        self.build_at(ZipDateTime::from_chrono(&Local::now())?)
    }

    /// Builds the XLSX file, stamping every part with the given date & time.
    ///
    /// The output depends only on the workbook and the date, so repeated calls yield identical bytes.
    #[tracing::instrument(skip(self))]
    pub fn build_at(&self, date: ZipDateTime) -> Result<Vec<u8>> {
        crate::write::assemble(self.parts()?, date)
    }
}
