// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Escaping for text embedded in SpreadsheetML parts.
//!
//! XML 1.0 cannot carry most C0 control characters at all, not even as character references. SpreadsheetML works
//! around this with `_xHHHH_` sequences, which readers decode back into the UTF-16 code unit `HHHH`.

use std::fmt::Write;

use crate::error::{Result, ZipError};

/// Returns whether the character has to be written as an `_xHHHH_` sequence.
///
/// Carriage returns are legal XML but parsers normalise them away, so they're encoded too.
fn needs_encoding(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{D}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Returns whether `rest` begins with something a reader would decode as an `_xHHHH_` sequence.
fn starts_escape_sequence(rest: &str) -> bool {
    let bytes = rest.as_bytes();

    bytes.len() >= 7
        && bytes[0] == b'_'
        && bytes[1] == b'x'
        && bytes[2..6].iter().all(u8::is_ascii_hexdigit)
        && bytes[6] == b'_'
}

/// Encodes cell text for a `<t>` element.
///
/// Control characters become `_xHHHH_`, an underscore which would otherwise start such a sequence becomes `_x005F_`,
/// and the five XML markup characters are entity escaped.
pub(crate) fn text(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());

    for (index, ch) in value.char_indices() {
        if needs_encoding(ch) || (ch == '_' && starts_escape_sequence(&value[index..])) {
            // Writing into a String cannot fail.
            let _ = write!(encoded, "_x{:04X}_", ch as u32);
        } else {
            encoded.push(ch);
        }
    }

    quick_xml::escape::escape(encoded.as_str()).into_owned()
}

/// Escapes a value for use inside an attribute, rejecting characters XML cannot represent.
pub(crate) fn attribute(what: &str, value: &str) -> Result<String> {
    if let Some(ch) = value.chars().find(|ch| needs_encoding(*ch)) {
        return Err(ZipError::EncodingError(format!(
            "{what} {value:?} contains the character U+{:04X}, which XML cannot represent",
            ch as u32
        )));
    }

    Ok(quick_xml::escape::escape(value).into_owned())
}
