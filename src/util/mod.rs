//! Collaborators shared by the codecs.
//!
//! # Responsibilities
//! - Supply cryptographically strong random bytes for fresh identifiers
//! - Convert identifier bytes to and from lowercase hex
//!
//! # Design Decisions
//! - Randomness comes from `rand::thread_rng`, a CSPRNG reseeded from the OS
//! - Hex conversion is delegated to the `hex` crate; no lookup tables of our own

pub mod encoding;
pub mod random;

pub use encoding::{from_hex, to_hex};
pub use random::fill_random;
