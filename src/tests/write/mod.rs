// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{LimitField, ZipError};
use crate::tests::{fixed_date, init_logger, read_u16, read_u32};
use crate::write::{assemble, ZipFileWriter};
use crate::{ZipDateTimeBuilder, ZipEntry};


const LOCAL_OVERHEAD: usize = 30;
const CENTRAL_OVERHEAD: usize = 46;
const END_LENGTH: usize = 22;

pub(crate) fn sample_entries() -> Vec<ZipEntry> {
    vec![
        ZipEntry::new("foo.bar", "Lorem ipsum dolor sit amet, consectetur adipiscing elit..."),
        ZipEntry::new("empty.txt", ""),
        ZipEntry::new("nested/dir/grüße.xml", "<a>ünïcödé</a>"),
    ]
}

fn local_length(entry: &ZipEntry) -> usize {
    LOCAL_OVERHEAD + entry.filename().len() + entry.content().len()
}

fn central_length(entry: &ZipEntry) -> usize {
    CENTRAL_OVERHEAD + entry.filename().len()
}

#[test]
fn empty() {
    let archive = ZipFileWriter::new(fixed_date()).close().expect("failed to close writer");

    assert_eq!(archive.len(), END_LENGTH);
    assert_eq!(read_u32(&archive, 0), 0x06054B50);
    assert_eq!(&archive[4..], &[0; 18]);
}

#[test]
fn total_length() {
    let entries = sample_entries();
    let archive = assemble(entries.clone(), fixed_date()).expect("failed to assemble");

    let expected: usize = entries.iter().map(local_length).sum::<usize>()
        + entries.iter().map(central_length).sum::<usize>()
        + END_LENGTH;
    assert_eq!(archive.len(), expected);
}

#[test]
fn local_header_fields() {
    let entry = ZipEntry::new("foo.bar", "123456789");
    let archive = assemble([entry], fixed_date()).expect("failed to assemble");
    let date = fixed_date();

    assert_eq!(read_u32(&archive, 0), 0x04034B50);
    assert_eq!(read_u16(&archive, 4), 20);
    assert_eq!(read_u16(&archive, 6), 0);
    assert_eq!(read_u16(&archive, 8), 0);
    assert_eq!(read_u16(&archive, 10), date.raw_time());
    assert_eq!(read_u16(&archive, 12), date.raw_date());
    assert_eq!(read_u32(&archive, 14), 0xCBF43926);
    assert_eq!(read_u32(&archive, 18), 9);
    assert_eq!(read_u32(&archive, 22), 9);
    assert_eq!(read_u16(&archive, 26), 7);
    assert_eq!(read_u16(&archive, 28), 0);
    assert_eq!(&archive[30..37], b"foo.bar");
    assert_eq!(&archive[37..46], b"123456789");
}

#[test]
fn central_and_end_fields() {
    let entry = ZipEntry::new("foo.bar", "123456789");
    let archive = assemble([entry], fixed_date()).expect("failed to assemble");
    let cd = 46;

    assert_eq!(read_u32(&archive, cd), 0x02014B50);
    assert_eq!(read_u16(&archive, cd + 4), 20);
    assert_eq!(read_u16(&archive, cd + 6), 20);
    assert_eq!(read_u32(&archive, cd + 16), 0xCBF43926);
    assert_eq!(read_u16(&archive, cd + 28), 7);
    assert_eq!(read_u32(&archive, cd + 42), 0);
    assert_eq!(&archive[cd + 46..cd + 53], b"foo.bar");

    let end = cd + 53;
    assert_eq!(archive.len(), end + END_LENGTH);
    assert_eq!(read_u32(&archive, end), 0x06054B50);
    assert_eq!(read_u16(&archive, end + 8), 1);
    assert_eq!(read_u16(&archive, end + 10), 1);
    assert_eq!(read_u32(&archive, end + 12), 53);
    assert_eq!(read_u32(&archive, end + 16), 46);
    assert_eq!(read_u16(&archive, end + 20), 0);
}

#[test]
fn sizes_count_bytes_not_chars() {
    let entry = ZipEntry::new("ü.txt", "ünïcödé");
    let archive = assemble([entry.clone()], fixed_date()).expect("failed to assemble");

    assert_eq!(read_u32(&archive, 18), entry.content().len() as u32);
    assert_eq!(read_u16(&archive, 26), entry.filename().len() as u16);
}

#[test]
fn deterministic() {
    let first = assemble(sample_entries(), fixed_date()).expect("failed to assemble");
    let second = assemble(sample_entries(), fixed_date()).expect("failed to assemble");

    assert_eq!(first, second);
}

#[test]
fn clock_only_changes_date_fields() {
    let other = ZipDateTimeBuilder::new().year(2001).month(6).day(30).hour(23).minute(59).second(58).build().unwrap();
    let entries = sample_entries();

    let first = assemble(entries.clone(), fixed_date()).expect("failed to assemble");
    let second = assemble(entries.clone(), other).expect("failed to assemble");
    assert_eq!(first.len(), second.len());

    let mut allowed = Vec::new();
    let mut offset = 0;
    for entry in &entries {
        allowed.extend(offset + 10..offset + 14);
        offset += local_length(entry);
    }
    for entry in &entries {
        allowed.extend(offset + 12..offset + 16);
        offset += central_length(entry);
    }

    for (index, (a, b)) in first.iter().zip(second.iter()).enumerate() {
        if a != b {
            assert!(allowed.contains(&index), "byte {index} differs outside of a date field");
        }
    }
    assert_ne!(first, second);
}

#[test]
fn duplicate_entry() {
    let mut writer = ZipFileWriter::new(fixed_date());
    writer.write_entry_whole(("a.txt", "one")).expect("failed to write entry");

    let offset = writer.offset();
    let result = writer.write_entry_whole(("a.txt", "two"));

    assert_eq!(result, Err(ZipError::DuplicateEntry("a.txt".to_string())));
    assert_eq!(writer.offset(), offset);
    assert_eq!(writer.len(), 1);
}

#[test]
fn filename_length_boundary() {
    init_logger();

    let longest = "a".repeat(u16::MAX as usize);
    assert!(assemble([ZipEntry::new(longest, "")], fixed_date()).is_ok());

    let too_long = "a".repeat(u16::MAX as usize + 1);
    let result = assemble([ZipEntry::new(too_long, "")], fixed_date());

    assert_eq!(
        result,
        Err(ZipError::FormatLimitExceeded { field: LimitField::FileNameLength, actual: 65536, max: 65535 })
    );
}

#[test]
fn failed_write_leaves_writer_untouched() {
    init_logger();

    let mut writer = ZipFileWriter::new(fixed_date());
    writer.write_entry_whole(("a.txt", "one")).expect("failed to write entry");

    let before = writer.offset();
    assert!(writer.write_entry_whole(("b".repeat(70_000), "two")).is_err());
    assert_eq!(writer.offset(), before);

    let archive = writer.close().expect("failed to close writer");
    assert_eq!(read_u16(&archive, archive.len() - 12), 1);
}

#[test]
fn entry_count_boundary() {
    let mut writer = ZipFileWriter::new(fixed_date());

    for index in 0..u16::MAX as usize {
        writer.write_entry_whole((index.to_string(), "")).expect("failed to write entry");
    }

    let result = writer.write_entry_whole(("overflow", ""));
    assert_eq!(
        result,
        Err(ZipError::FormatLimitExceeded { field: LimitField::EntryCount, actual: 65536, max: 65535 })
    );

    let archive = writer.close().expect("failed to close writer");
    assert_eq!(read_u16(&archive, archive.len() - 12), u16::MAX);
}
