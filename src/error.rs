// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ZipError {
    #[error("{field} of {actual} exceeds the format limit of {max}")]
    FormatLimitExceeded { field: LimitField, actual: u64, max: u64 },
    #[error("{field} {value} cannot be stored in a ZIP date/time field (supported range is {min} to {max})")]
    InvalidTimestamp { field: &'static str, value: i64, min: i64, max: i64 },
    #[error("unable to encode value: {0}")]
    EncodingError(String),
    #[error("an entry named '{0}' has already been written")]
    DuplicateEntry(String),
}

/// The fixed-width header field which a value failed to fit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitField {
    EntryCount,
    FileNameLength,
    ContentSize,
    LocalHeaderOffset,
    CentralDirectoryOffset,
    CentralDirectorySize,
}

impl Display for LimitField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::EntryCount => "entry count",
            Self::FileNameLength => "file name length",
            Self::ContentSize => "content size",
            Self::LocalHeaderOffset => "local file header offset",
            Self::CentralDirectoryOffset => "central directory offset",
            Self::CentralDirectorySize => "central directory size",
        };

        write!(f, "{}", message)
    }
}

impl ZipError {
    pub(crate) fn limit(field: LimitField, actual: usize, max: u64) -> Self {
        Self::FormatLimitExceeded { field, actual: actual as u64, max }
    }
}
