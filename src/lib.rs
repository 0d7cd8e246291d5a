// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # xlsx_pack
//!
//! A minimal XLSX writer built on an in-memory, store-only ZIP assembler.
//!
//! ## Features
//! - Synchronous, allocation-only design with no I/O of its own.
//! - Deterministic output: the same entries and timestamp always yield the same bytes.
//! - Every fixed-width header field is bounds checked; nothing is silently truncated.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance
//!   for the subset it writes (no compression, ZIP64, encryption, or multi-disk archives).
//!
//! ## Example
//! ```
//! # use xlsx_pack::{assemble, ZipDateTimeBuilder, ZipEntry};
//! # use xlsx_pack::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let date = ZipDateTimeBuilder::new().year(2024).month(1).day(15).hour(13).minute(5).second(10).build()?;
//! let archive = assemble([ZipEntry::new("hello.txt", "Hello, world!")], date)?;
//!
//! assert_eq!(&archive[..4], b"PK\x03\x04");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod crc;
pub mod date;
pub(crate) mod entry;
pub mod error;
pub(crate) mod spec;
pub(crate) mod utils;
pub mod write;
pub mod xlsx;


pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::ZipEntry;
pub use crate::write::{assemble, ZipFileWriter};
pub use crate::xlsx::{Cell, Workbook, Worksheet, XlsxBuilder};
