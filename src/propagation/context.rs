//! Extract and inject a full trace context.

use serde::{Deserialize, Serialize};

use super::carrier::{HeaderCarrier, TRACEPARENT_HEADER, TRACESTATE_HEADER};
use crate::traceparent::{self, Traceparent};
use crate::tracestate::{self, Tracestate};

/// A traceparent plus the tracestate that travelled with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    pub traceparent: Traceparent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracestate: Option<Tracestate>,
}

impl TraceContext {
    /// Start a fresh trace with no vendor state.
    pub fn root(sampled: bool) -> Self {
        Self {
            traceparent: traceparent::make(sampled),
            tracestate: None,
        }
    }

    /// Context for an outbound call: child traceparent, same tracestate.
    pub fn child(&self, sampled: Option<bool>) -> Self {
        Self {
            traceparent: self.traceparent.child(sampled),
            tracestate: self.tracestate.clone(),
        }
    }

    /// Mutable tracestate, created empty if the context had none.
    pub fn tracestate_mut(&mut self) -> &mut Tracestate {
        self.tracestate.get_or_insert_with(Tracestate::new)
    }
}

/// Read the trace context from `carrier`.
///
/// `None` when the traceparent is missing or rejected. The tracestate is only
/// looked at once the traceparent is known to be good.
pub fn extract<C: HeaderCarrier + ?Sized>(carrier: &C) -> Option<TraceContext> {
    let traceparent = carrier.get(TRACEPARENT_HEADER).and_then(traceparent::parse)?;
    let tracestate = carrier.get(TRACESTATE_HEADER).map(tracestate::parse);

    Some(TraceContext {
        traceparent,
        tracestate,
    })
}

/// Like [`extract`], falling back to a new root context.
pub fn extract_or_make<C: HeaderCarrier + ?Sized>(carrier: &C, sampled: bool) -> TraceContext {
    extract(carrier).unwrap_or_else(|| {
        tracing::debug!("no usable upstream traceparent, starting a new trace");
        TraceContext::root(sampled)
    })
}

/// Write `context` into `carrier`. An empty or absent tracestate is not written.
pub fn inject<C: HeaderCarrier + ?Sized>(context: &TraceContext, carrier: &mut C) {
    carrier.set(TRACEPARENT_HEADER, context.traceparent.to_string());

    if let Some(state) = context.tracestate.as_ref().filter(|s| !s.is_empty()) {
        carrier.set(TRACESTATE_HEADER, state.to_string());
    }
}
