// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP files.
//!
//! Archives are assembled entirely in memory and always use the Stored method. Every fixed-width header field is
//! validated before it's encoded, so an entry or archive which doesn't fit is reported rather than truncated.
//!
//! # Example
//! ```
//! # use xlsx_pack::{ZipDateTimeBuilder, ZipEntry, write::ZipFileWriter};
//! # use xlsx_pack::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let date = ZipDateTimeBuilder::new().year(2024).month(1).day(15).build()?;
//! let mut writer = ZipFileWriter::new(date);
//!
//! writer.write_entry_whole(ZipEntry::new("foo.txt", "This is an example file."))?;
//! let archive: Vec<u8> = writer.close()?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod entry_whole;

use std::collections::HashSet;

use crate::date::ZipDateTime;
use crate::entry::ZipEntry;
use crate::error::{LimitField, Result, ZipError};
use crate::spec::consts::{
    CDH_LENGTH, CDH_SIGNATURE, EOCDR_SIGNATURE, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE, SIGNATURE_LENGTH,
};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader};

use entry_whole::EntryWholeWriter;

pub(crate) struct CentralDirectoryEntry {
    pub header: CentralDirectoryRecord,
    pub filename: String,
}

/// An in-memory ZIP file writer.
///
/// Every entry is stamped with the single date & time given at construction, so all records within one archive agree.
///
/// # Note
/// - [`ZipFileWriter::close()`] must be called to obtain the archive; dropping the writer discards it.
pub struct ZipFileWriter {
    pub(crate) buffer: Vec<u8>,
    pub(crate) cd_entries: Vec<CentralDirectoryEntry>,
    pub(crate) filenames: HashSet<String>,
    pub(crate) date: ZipDateTime,
}

impl ZipFileWriter {
    /// Construct a new ZIP file writer which stamps every entry with the given date & time.
    pub fn new(date: ZipDateTime) -> Self {
        Self { buffer: Vec::new(), cd_entries: Vec::new(), filenames: HashSet::new(), date }
    }

    /// Write a new ZIP entry of known size and data.
    ///
    /// If an error is returned, the writer is left exactly as it was before the call.
    pub fn write_entry_whole<E: Into<ZipEntry>>(&mut self, entry: E) -> Result<()> {
        EntryWholeWriter::from_raw(self, entry.into()).write()
    }

    /// Returns the number of entries written so far.
    pub fn len(&self) -> usize {
        self.cd_entries.len()
    }

    /// Returns whether no entries have been written yet.
    pub fn is_empty(&self) -> bool {
        self.cd_entries.is_empty()
    }

    /// Returns the current length of the archive's local records, ie. the offset the next entry will be written at.
    pub fn offset(&self) -> usize {
        self.buffer.len()
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory headers.
    /// - Writing the end of central directory header.
    #[tracing::instrument(skip(self), fields(entries = self.cd_entries.len()))]
    pub fn close(self) -> Result<Vec<u8>> {
        let cd_offset = self.buffer.len();
        let cd_offset_u32: u32 = cd_offset
            .try_into()
            .map_err(|_| ZipError::limit(LimitField::CentralDirectoryOffset, cd_offset, NON_ZIP64_MAX_SIZE as u64))?;

        let num_of_entries = self.cd_entries.len();
        let num_of_entries_u16: u16 = num_of_entries
            .try_into()
            .map_err(|_| ZipError::limit(LimitField::EntryCount, num_of_entries, NON_ZIP64_MAX_NUM_FILES as u64))?;

        let cd_length = self
            .cd_entries
            .iter()
            .map(|entry| SIGNATURE_LENGTH + CDH_LENGTH + entry.filename.len())
            .sum();
        let mut central_directory = Vec::with_capacity(cd_length);

        for entry in &self.cd_entries {
            central_directory.extend_from_slice(&CDH_SIGNATURE.to_le_bytes());
            central_directory.extend_from_slice(&entry.header.as_slice());
            central_directory.extend_from_slice(crate::utils::encode_utf8(&entry.filename));
        }

        let central_directory_size = central_directory.len();
        let central_directory_size_u32: u32 = central_directory_size.try_into().map_err(|_| {
            ZipError::limit(LimitField::CentralDirectorySize, central_directory_size, NON_ZIP64_MAX_SIZE as u64)
        })?;

        let header = EndOfCentralDirectoryHeader {
            disk_num: 0,
            start_cent_dir_disk: 0,
            num_of_entries_disk: num_of_entries_u16,
            num_of_entries: num_of_entries_u16,
            size_cent_dir: central_directory_size_u32,
            cent_dir_offset: cd_offset_u32,
            file_comm_length: 0,
        };

        let mut eocdr = Vec::with_capacity(SIGNATURE_LENGTH + crate::spec::consts::EOCDR_LENGTH);
        eocdr.extend_from_slice(&EOCDR_SIGNATURE.to_le_bytes());
        eocdr.extend_from_slice(&header.as_slice());

        tracing::debug!(cd_offset, central_directory_size, "wrote central directory");

        Ok(crate::utils::concat_buffers(&[self.buffer, central_directory, eocdr]))
    }
}

/// Assembles a complete ZIP archive from an ordered list of entries.
///
/// Entries are laid out in the order given and all share the same date & time. Identical entries and dates always
/// produce byte-identical archives.
///
/// # Errors
/// - [`ZipError::FormatLimitExceeded`] if the entry count, a filename, a content size, or an offset doesn't fit into
///   its header field.
/// - [`ZipError::DuplicateEntry`] if two entries share a filename.
#[tracing::instrument(skip(entries))]
pub fn assemble<I>(entries: I, date: ZipDateTime) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: Into<ZipEntry>,
{
    let mut writer = ZipFileWriter::new(date);

    for entry in entries {
        writer.write_entry_whole(entry)?;
    }

    writer.close()
}
