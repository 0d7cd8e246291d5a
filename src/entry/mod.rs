// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// A single named text file to be stored within a ZIP archive.
///
/// Each [`ZipEntry`] is immutable once constructed and is moved into the writer which stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    pub(crate) filename: String,
    pub(crate) content: String,
}

impl ZipEntry {
    /// Constructs a new entry from an archive-relative, forward-slash separated path and its UTF-8 content.
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self { filename: filename.into(), content: content.into() }
    }

    /// Returns the entry's filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the entry's content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<F: Into<String>, C: Into<String>> From<(F, C)> for ZipEntry {
    fn from((filename, content): (F, C)) -> Self {
        Self::new(filename, content)
    }
}
