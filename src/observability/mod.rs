//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! traceparent / tracestate / propagation
//!     → tracing events (debug/trace only: rejections, repairs, evictions)
//!     → logging.rs subscriber (installed by the binary, never by the library)
//! ```
//!
//! # Design Decisions
//! - The library only emits events; embedding applications choose the subscriber
//! - Nothing is emitted above debug, so a default subscriber stays quiet

pub mod logging;

pub use logging::{init_logging, LoggingError};
