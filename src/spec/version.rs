// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
//
// Every entry is stored, unencrypted, and without ZIP64 fields, so version 2.0 covers all of them.
pub fn as_needed_to_extract() -> u16 {
    20
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
//
// The upper byte is the host compatibility (0 = MS-DOS/FAT) and the lower byte the spec version (2.0).
pub fn as_made_by() -> u16 {
    20
}
