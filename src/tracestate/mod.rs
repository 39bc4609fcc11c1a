//! `tracestate` header store.
//!
//! # Responsibilities
//! - Hold up to 32 vendor key/value pairs in recency order
//! - Validate keys and values on every mutation
//! - Parse incoming header values leniently and serialize outgoing ones
//!
//! # Design Decisions
//! - Behaves like a small LRU: `set` moves a key to the front, overflow evicts the back
//! - `set` rejects bad input with an error; `parse` silently drops bad members
//! - Only parse a tracestate after its traceparent parsed successfully
//!
//! ```
//! let mut state = tctx::tracestate::parse("rojo=00f067aa0ba902b7,congo=t61rcWkgMzE");
//! state.set("congo", "ucfJifl5GOE").unwrap();
//! assert_eq!(state.to_string(), "congo=ucfJifl5GOE,rojo=00f067aa0ba902b7");
//! ```

pub mod store;
pub mod types;
pub mod validation;

pub use store::Tracestate;
pub use types::{TracestateError, TracestateResult, MAX_ENTRIES};

/// Build a tracestate from seed pairs, first pair most recent.
/// See [`Tracestate::with_entries`].
pub fn make<I, K, V>(initial: I) -> TracestateResult<Tracestate>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: std::fmt::Display,
{
    Tracestate::with_entries(initial)
}

/// Parse a header value. Never fails: members without `=`, or with an
/// invalid key or value, are dropped. Leftmost members are the most recent;
/// past 32 valid members the rightmost ones are discarded.
pub fn parse(value: &str) -> Tracestate {
    Tracestate::parse(value)
}
