//! Identifier and flag types carried by a traceparent.

use std::fmt;

use thiserror::Error;

use crate::util::encoding::{from_hex_array, to_hex};
use crate::util::random::random_bytes;

/// 16-byte trace identifier. Never all-zero once inside a [`Traceparent`].
///
/// [`Traceparent`]: super::Traceparent
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId([u8; 16]);

impl TraceId {
    /// The all-zero id, which the wire format forbids.
    pub const INVALID: TraceId = TraceId([0u8; 16]);

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Decode 32 hex digits. Returns `None` for the wrong length, a non-hex
    /// digit, or the all-zero id.
    pub fn from_hex(value: &str) -> Option<Self> {
        from_hex_array(value).map(Self).filter(Self::is_valid)
    }

    /// Draw a fresh non-zero id.
    pub fn random() -> Self {
        loop {
            let id = Self(random_bytes());
            if id.is_valid() {
                return id;
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().any(|&b| b != 0)
    }
}

impl fmt::Debug for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraceId({})", self.to_hex())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 8-byte parent (span) identifier. Never all-zero once inside a traceparent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentId([u8; 8]);

impl ParentId {
    /// The all-zero id, which the wire format forbids.
    pub const INVALID: ParentId = ParentId([0u8; 8]);

    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Decode 16 hex digits. Returns `None` for the wrong length, a non-hex
    /// digit, or the all-zero id.
    pub fn from_hex(value: &str) -> Option<Self> {
        from_hex_array(value).map(Self).filter(Self::is_valid)
    }

    /// Draw a fresh non-zero id.
    pub fn random() -> Self {
        loop {
            let id = Self(random_bytes());
            if id.is_valid() {
                return id;
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().any(|&b| b != 0)
    }
}

impl fmt::Debug for ParentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParentId({})", self.to_hex())
    }
}

impl fmt::Display for ParentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Trace flags bitfield.
///
/// Only [`TraceFlags::SAMPLED`] and [`TraceFlags::RANDOM`] carry meaning; the
/// other six bits are reserved and passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraceFlags(u8);

impl TraceFlags {
    /// This branch of the trace should be recorded.
    pub const SAMPLED: TraceFlags = TraceFlags(0b0000_0001);
    /// The low bits of the trace id are random enough for sampling decisions.
    pub const RANDOM: TraceFlags = TraceFlags(0b0000_0010);
    pub const NONE: TraceFlags = TraceFlags(0);

    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: TraceFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_sampled(&self) -> bool {
        self.contains(Self::SAMPLED)
    }

    pub fn is_random(&self) -> bool {
        self.contains(Self::RANDOM)
    }

    /// Set or clear the sampled bit, leaving every other bit as is.
    pub fn with_sampled(self, sampled: bool) -> Self {
        if sampled {
            Self(self.0 | Self::SAMPLED.0)
        } else {
            Self(self.0 & !Self::SAMPLED.0)
        }
    }
}

impl std::ops::BitOr for TraceFlags {
    type Output = TraceFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl From<u8> for TraceFlags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<TraceFlags> for u8 {
    fn from(flags: TraceFlags) -> Self {
        flags.0
    }
}

impl fmt::Display for TraceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

/// Returned by `Traceparent::from_str` when the value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid traceparent: {0:?}")]
pub struct ParseTraceparentError(pub String);
