// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::xlsx::escape;

/// The value held by a single worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Serialises this cell as a SpreadsheetML `<c>` element at the given reference (eg. `B3`).
    ///
    /// Numbers are stored as values and text as inline strings, so the package needs no shared strings part.
    pub(crate) fn to_xml(&self, reference: &str) -> Result<String> {
        match self {
            Cell::Number(value) if value.is_finite() => Ok(format!(r#"<c r="{reference}"><v>{value}</v></c>"#)),
            Cell::Number(value) => {
                Err(ZipError::EncodingError(format!("cell {reference} holds {value}, which has no SpreadsheetML form")))
            }
            Cell::Text(value) => {
                let escaped = escape::text(value);
                let space = if value.trim() != value.as_str() { r#" xml:space="preserve""# } else { "" };

                Ok(format!(r#"<c r="{reference}" t="inlineStr"><is><t{space}>{escaped}</t></is></c>"#))
            }
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! number_from {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Cell {
                fn from(value: $type) -> Self {
                    Self::Number(value.into())
                }
            }
        )*
    };
}

number_from!(f32, i8, i16, i32, u8, u16, u32);

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}
