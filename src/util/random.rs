//! Random byte source.

use rand::RngCore;

/// Fill `buf` with cryptographically secure random bytes.
///
/// A failure of the OS entropy source panics inside `rand`; there is no retry.
pub fn fill_random(buf: &mut [u8]) {
    rand::thread_rng().fill_bytes(buf);
}

/// Draw `N` random bytes.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    fill_random(&mut bytes);
    bytes
}
