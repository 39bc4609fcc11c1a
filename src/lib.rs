//! W3C Trace Context headers: `traceparent` and `tracestate`.
//!
//! ```text
//!   inbound request                                    outbound request
//!  ┌──────────────┐    ┌─────────────┐    ┌────────┐    ┌──────────────┐
//!  │ traceparent  │───▶│ traceparent │───▶│ child  │───▶│ traceparent  │
//!  │ tracestate   │─┐  │   parse     │    └────────┘    │ tracestate   │
//!  └──────────────┘ │  └─────────────┘                  └──────────────┘
//!                   │  ┌─────────────┐    ┌────────┐           ▲
//!                   └─▶│ tracestate  │───▶│  set   │───────────┘
//!                      │   parse     │    └────────┘
//!                      └─────────────┘
//! ```

// Codecs
pub mod traceparent;
pub mod tracestate;

// Composition
pub mod propagation;

// Cross-cutting concerns
pub mod config;
pub mod observability;
pub mod util;

pub use propagation::TraceContext;
pub use traceparent::Traceparent;
pub use tracestate::Tracestate;
