// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::crc::crc32;
use crate::entry::ZipEntry;
use crate::error::{LimitField, Result, ZipError};
use crate::spec::consts::{LFH_LENGTH, LFH_SIGNATURE, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE, SIGNATURE_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, LocalFileHeader};
use crate::utils::encode_utf8;
use crate::write::{CentralDirectoryEntry, ZipFileWriter};

/// The Stored compression method.
const COMPRESSION_STORED: u16 = 0;

pub struct EntryWholeWriter<'b> {
    writer: &'b mut ZipFileWriter,
    entry: ZipEntry,
}

impl<'b> EntryWholeWriter<'b> {
    pub fn from_raw(writer: &'b mut ZipFileWriter, entry: ZipEntry) -> Self {
        Self { writer, entry }
    }

    // All validation happens before the writer is touched.
    #[tracing::instrument(skip(self), fields(filename = %self.entry.filename))]
    pub fn write(self) -> Result<()> {
        if self.writer.filenames.contains(&self.entry.filename) {
            return Err(ZipError::DuplicateEntry(self.entry.filename));
        }

        let num_of_entries = self.writer.cd_entries.len() + 1;
        if num_of_entries > NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::limit(LimitField::EntryCount, num_of_entries, NON_ZIP64_MAX_NUM_FILES as u64));
        }

        let filename = encode_utf8(&self.entry.filename);
        let data = encode_utf8(&self.entry.content);

        let file_name_length: u16 = filename.len().try_into().map_err(|_| {
            ZipError::limit(LimitField::FileNameLength, filename.len(), NON_ZIP64_MAX_NUM_FILES as u64)
        })?;
        let size: u32 = data
            .len()
            .try_into()
            .map_err(|_| ZipError::limit(LimitField::ContentSize, data.len(), NON_ZIP64_MAX_SIZE as u64))?;

        let offset = self.writer.buffer.len();
        let lh_offset: u32 = offset
            .try_into()
            .map_err(|_| ZipError::limit(LimitField::LocalHeaderOffset, offset, NON_ZIP64_MAX_SIZE as u64))?;

        let lf_header = LocalFileHeader {
            version: crate::spec::version::as_needed_to_extract(),
            flags: 0,
            compression: COMPRESSION_STORED,
            mod_time: self.writer.date.time,
            mod_date: self.writer.date.date,
            crc: crc32(data),
            compressed_size: size,
            uncompressed_size: size,
            file_name_length,
            extra_field_length: 0,
        };

        let header = CentralDirectoryRecord::from_local(&lf_header, crate::spec::version::as_made_by(), lh_offset);

        let buffer = &mut self.writer.buffer;
        buffer.reserve(SIGNATURE_LENGTH + LFH_LENGTH + filename.len() + data.len());
        buffer.extend_from_slice(&LFH_SIGNATURE.to_le_bytes());
        buffer.extend_from_slice(&lf_header.as_slice());
        buffer.extend_from_slice(filename);
        buffer.extend_from_slice(data);

        tracing::debug!(offset, size, crc = lf_header.crc, "wrote local file header");

        self.writer.filenames.insert(self.entry.filename.clone());
        self.writer.cd_entries.push(CentralDirectoryEntry { header, filename: self.entry.filename });

        Ok(())
    }
}
