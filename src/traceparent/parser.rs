//! Validating traceparent parser.
//!
//! Outright grammar violations reject the value. A well-formed value whose
//! trace id or parent id is malformed or all-zero is repaired instead: only the
//! bad field is replaced with fresh random bytes.

use super::header::{random_ids, Traceparent, INVALID_VERSION, TRACEPARENT_LEN, W3C_TRACEPARENT_VERSION};
use super::types::{ParentId, TraceFlags, TraceId};
use crate::util::encoding::from_hex_array;

/// Parse a `traceparent` header value. Never panics; `None` means rejected.
///
/// The decoded value is always pinned to version `00`, whatever version the
/// input carried.
pub fn parse(value: &str) -> Option<Traceparent> {
    let value = value.trim_matches(is_ows);

    if value.len() < TRACEPARENT_LEN {
        tracing::trace!(len = value.len(), "traceparent rejected: too short");
        return None;
    }

    let segments: Vec<&str> = value.split('-').collect();
    if segments.len() < 4 {
        tracing::trace!(segments = segments.len(), "traceparent rejected: too few segments");
        return None;
    }

    if segments[..4].iter().any(|s| s.contains('_')) {
        tracing::trace!("traceparent rejected: underscore in hex segment");
        return None;
    }

    let version = parse_byte(segments[0])?;
    if version == INVALID_VERSION {
        tracing::trace!("traceparent rejected: reserved version ff");
        return None;
    }
    // Only versions we don't know yet may append segments.
    if version == W3C_TRACEPARENT_VERSION && segments.len() != 4 {
        tracing::trace!(segments = segments.len(), "traceparent rejected: extra segments for version 00");
        return None;
    }

    let flags = TraceFlags::new(parse_byte(segments[3])?);

    let (trace_id, parent_id) = match (TraceId::from_hex(segments[1]), ParentId::from_hex(segments[2])) {
        (Some(trace_id), Some(parent_id)) => (trace_id, parent_id),
        (trace_id, parent_id) => {
            tracing::debug!(
                trace_id_valid = trace_id.is_some(),
                parent_id_valid = parent_id.is_some(),
                "traceparent repaired: regenerating invalid ids"
            );
            let (fresh_trace, fresh_parent) = random_ids();
            (trace_id.unwrap_or(fresh_trace), parent_id.unwrap_or(fresh_parent))
        }
    };

    Some(Traceparent::from_parts(trace_id, parent_id, flags))
}

/// Optional whitespace: space or horizontal tab.
fn is_ows(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Exactly two hex digits.
fn parse_byte(segment: &str) -> Option<u8> {
    let [byte] = from_hex_array::<1>(segment)?;
    Some(byte)
}
