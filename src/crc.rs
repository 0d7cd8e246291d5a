// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! CRC-32 (ISO 3309) as stored in ZIP headers.
//!
//! Reflected polynomial 0xEDB88320, initial value 0xFFFFFFFF, final XOR 0xFFFFFFFF, processed one byte at a time
//! through a 256-entry lookup table.

const POLYNOMIAL: u32 = 0xEDB88320;

/// The byte-wise lookup table, built at compile time.
static TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut index = 0;

    while index < 256 {
        let mut crc = index as u32;
        let mut bit = 0;

        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL } else { crc >> 1 };
            bit += 1;
        }

        table[index] = crc;
        index += 1;
    }

    table
}

/// Computes the CRC-32 of the given data in one call.
///
/// ```
/// assert_eq!(xlsx_pack::crc::crc32(b"123456789"), 0xCBF43926);
/// ```
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(data);
    hasher.finalize()
}

/// An incremental CRC-32 hasher.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    /// Constructs a hasher with the initial register value.
    pub fn new() -> Self {
        Self { state: 0xFFFFFFFF }
    }

    /// Feeds more data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.state;

        for byte in data {
            crc = (crc >> 8) ^ TABLE[((crc ^ *byte as u32) & 0xFF) as usize];
        }

        self.state = crc;
    }

    /// Consumes the hasher and returns the final checksum.
    pub fn finalize(self) -> u32 {
        self.state ^ 0xFFFFFFFF
    }
}
