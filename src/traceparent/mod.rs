//! `traceparent` header codec.
//!
//! ```text
//! 00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01
//! ^  ^                                ^                ^
//! |  |                                |                flags (2 hex)
//! |  |                                parent-id (16 hex)
//! |  trace-id (32 hex)
//! version (2 hex)
//! ```
//!
//! # Responsibilities
//! - Create root traceparents with fresh random ids
//! - Parse and validate incoming header values
//! - Derive child hops and expose the sampled/random flags
//!
//! # Design Decisions
//! - `Traceparent` is a value type; `child` returns a new value
//! - `sample`/`unsample` are the only in-place mutators and take `&mut`
//! - Malformed ids in an otherwise well-formed value are regenerated, not rejected
//!
//! ```
//! let incoming = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";
//! let parent = tctx::traceparent::parse(incoming).unwrap_or_else(|| tctx::traceparent::make(true));
//! let outgoing = parent.child(None).to_string();
//! assert_eq!(&outgoing[..36], &incoming[..36]);
//! ```

pub mod header;
pub mod parser;
pub mod types;

pub use header::Traceparent;
pub use types::{ParentId, ParseTraceparentError, TraceFlags, TraceId};

/// Bitmask of the sampled flag.
pub const FLAG_SAMPLE: u8 = TraceFlags::SAMPLED.bits();
/// Bitmask of the random flag.
pub const FLAG_RANDOM: u8 = TraceFlags::RANDOM.bits();

/// Start a new trace. See [`Traceparent::make`].
pub fn make(sampled: bool) -> Traceparent {
    Traceparent::make(sampled)
}

/// Parse a header value. See [`parser::parse`].
pub fn parse(value: &str) -> Option<Traceparent> {
    parser::parse(value)
}

/// Set the sampled flag on `id`.
///
/// W3C Trace Context asks that you `child()` first so the
/// decision applies to your own hop only.
pub fn sample(id: &mut Traceparent) {
    id.sample();
}

/// Clear the sampled flag on `id`.
pub fn unsample(id: &mut Traceparent) {
    id.unsample();
}

pub fn is_sampled(id: &Traceparent) -> bool {
    id.is_sampled()
}

pub fn is_randomed(id: &Traceparent) -> bool {
    id.is_randomed()
}
