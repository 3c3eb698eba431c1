// file: src/loader/latin1.rs
// description: ISO-8859-1 decoding that accepts every byte value
// reference: https://en.wikipedia.org/wiki/ISO/IEC_8859-1

/// Decodes `bytes` as Latin-1. Byte `b` always maps to `U+00b`, so this never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
