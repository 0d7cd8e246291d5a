// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::xlsx::Cell;

/// An append-only collection of named worksheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Constructs an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new, empty worksheet and returns a mutable reference to it.
    pub fn add_worksheet(&mut self, name: impl Into<String>) -> &mut Worksheet {
        self.worksheets.push(Worksheet::new(name));

        let last = self.worksheets.len() - 1;
        &mut self.worksheets[last]
    }

    /// Returns the worksheets in the order they were added.
    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }
}

/// A named, ordered sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    /// Constructs an empty worksheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), rows: Vec::new() }
    }

    /// Returns the worksheet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a row of cells below the last one.
    pub fn add_row<I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the rows in the order they were added.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}
