//! Byte and hex-string conversion.

/// Encode bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string of either case. `None` on odd length or a non-hex digit.
pub fn from_hex(value: &str) -> Option<Vec<u8>> {
    hex::decode(value).ok()
}

/// Decode exactly `N` bytes (`2 * N` hex digits).
pub fn from_hex_array<const N: usize>(value: &str) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(value, &mut out).ok()?;
    Some(out)
}
