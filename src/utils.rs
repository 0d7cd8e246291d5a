// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// Encodes text into the raw bytes stored within the archive.
///
/// Rust strings are guaranteed to be valid UTF-8, so this never fails and never copies.
pub(crate) fn encode_utf8(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Concatenates a sequence of buffers into a single, exactly sized buffer.
pub(crate) fn concat_buffers<B: AsRef<[u8]>>(buffers: &[B]) -> Vec<u8> {
    let total = buffers.iter().map(|buffer| buffer.as_ref().len()).sum();
    let mut output = Vec::with_capacity(total);

    for buffer in buffers {
        output.extend_from_slice(buffer.as_ref());
    }

    output
}
