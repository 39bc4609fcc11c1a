//! The `Traceparent` value type.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::parser;
use super::types::{ParentId, ParseTraceparentError, TraceFlags, TraceId};
use crate::util::random::random_bytes;

/// The only version this crate emits.
pub const W3C_TRACEPARENT_VERSION: u8 = 0x00;

/// The version reserved as invalid by the wire format.
pub const INVALID_VERSION: u8 = 0xff;

/// Length of a version `00` header value.
pub const TRACEPARENT_LEN: usize = 55;

/// One hop of a distributed trace: version, trace id, parent id and flags.
///
/// Version and trace id are fixed for the lifetime of the value. A new parent
/// id only ever appears on a new value produced by [`Traceparent::child`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Traceparent {
    version: u8,
    trace_id: TraceId,
    parent_id: ParentId,
    flags: TraceFlags,
}

impl Traceparent {
    pub(crate) fn from_parts(trace_id: TraceId, parent_id: ParentId, flags: TraceFlags) -> Self {
        Self {
            version: W3C_TRACEPARENT_VERSION,
            trace_id,
            parent_id,
            flags,
        }
    }

    /// Start a new trace with fresh random ids.
    ///
    /// The random flag is always set, the sampled flag only when `sampled`.
    pub fn make(sampled: bool) -> Self {
        let (trace_id, parent_id) = random_ids();
        Self::from_parts(
            trace_id,
            parent_id,
            TraceFlags::RANDOM.with_sampled(sampled),
        )
    }

    /// Parse a header value, see [`crate::traceparent::parse`].
    pub fn parse(value: &str) -> Option<Self> {
        parser::parse(value)
    }

    /// Branch into a child hop with a fresh parent id.
    ///
    /// With `None` the flags are copied as they are. With `Some(sampled)` only
    /// the sampled bit is overridden; the random bit and reserved bits always
    /// carry over. `self` is left untouched.
    pub fn child(&self, sampled: Option<bool>) -> Self {
        let flags = match sampled {
            Some(sampled) => self.flags.with_sampled(sampled),
            None => self.flags,
        };

        let mut parent_id = ParentId::random();
        while parent_id == self.parent_id {
            parent_id = ParentId::random();
        }

        Self {
            version: self.version,
            trace_id: self.trace_id,
            parent_id,
            flags,
        }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    pub fn parent_id(&self) -> &ParentId {
        &self.parent_id
    }

    pub fn flags(&self) -> TraceFlags {
        self.flags
    }

    pub fn is_sampled(&self) -> bool {
        self.flags.is_sampled()
    }

    pub fn is_randomed(&self) -> bool {
        self.flags.is_random()
    }

    /// Set the sampled bit on this value only.
    pub fn sample(&mut self) {
        self.flags = self.flags.with_sampled(true);
    }

    /// Clear the sampled bit on this value only.
    pub fn unsample(&mut self) {
        self.flags = self.flags.with_sampled(false);
    }
}

impl Default for Traceparent {
    fn default() -> Self {
        Self::make(true)
    }
}

impl fmt::Display for Traceparent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}-{}-{}-{}",
            self.version, self.trace_id, self.parent_id, self.flags
        )
    }
}

impl FromStr for Traceparent {
    type Err = ParseTraceparentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s).ok_or_else(|| ParseTraceparentError(s.to_string()))
    }
}

impl Serialize for Traceparent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Traceparent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// 24 random bytes split into a trace id and a parent id.
pub(crate) fn random_ids() -> (TraceId, ParentId) {
    loop {
        let bytes: [u8; 24] = random_bytes();
        let mut trace = [0u8; 16];
        let mut parent = [0u8; 8];
        trace.copy_from_slice(&bytes[..16]);
        parent.copy_from_slice(&bytes[16..]);

        let (trace_id, parent_id) = (TraceId::from_bytes(trace), ParentId::from_bytes(parent));
        if trace_id.is_valid() && parent_id.is_valid() {
            return (trace_id, parent_id);
        }
    }
}
