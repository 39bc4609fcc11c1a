//! Trace context propagation across a hop.
//!
//! # Data Flow
//! ```text
//! inbound headers
//!     → carrier.rs (header lookup)
//!     → traceparent::parse
//!     → tracestate::parse (only if traceparent parsed)
//!     → TraceContext
//!
//! outbound call:
//!     TraceContext::child
//!     → inject into carrier (traceparent, tracestate if non-empty)
//! ```
//!
//! # Design Decisions
//! - No transport: anything that can get/set a header value is a carrier
//! - Header names are the lowercase W3C names; no case folding or merging of repeated fields

pub mod carrier;
pub mod context;

pub use carrier::{HeaderCarrier, TRACEPARENT_HEADER, TRACESTATE_HEADER};
pub use context::{extract, extract_or_make, inject, TraceContext};
