//! End-to-end hop: inbound headers to outbound headers.

use std::collections::{BTreeMap, HashMap};

use tctx::propagation::{self, HeaderCarrier, TraceContext, TRACEPARENT_HEADER, TRACESTATE_HEADER};

mod common;
use common::assert_valid_id;

const UPSTREAM: &str = "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-03";

fn inbound(traceparent: Option<&str>, tracestate: Option<&str>) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if let Some(v) = traceparent {
        headers.insert(TRACEPARENT_HEADER.to_string(), v.to_string());
    }
    if let Some(v) = tracestate {
        headers.insert(TRACESTATE_HEADER.to_string(), v.to_string());
    }
    headers
}

#[test]
fn test_continue_upstream_trace() {
    let headers = inbound(Some(UPSTREAM), Some("rojo=00f067aa0ba902b7,congo=t61rcWkgMzE"));
    let ctx = propagation::extract_or_make(&headers, true);

    let mut outbound: BTreeMap<String, String> = BTreeMap::new();
    let child = ctx.child(None);
    propagation::inject(&child, &mut outbound);

    let traceparent = outbound.get(TRACEPARENT_HEADER).unwrap();
    assert_valid_id(traceparent);
    assert!(traceparent.starts_with("00-0af7651916cd43dd8448eb211c80319c-"));
    assert!(traceparent.ends_with("-03"));
    assert_ne!(traceparent, UPSTREAM);
    assert_eq!(
        outbound.get(TRACESTATE_HEADER).map(String::as_str),
        Some("rojo=00f067aa0ba902b7,congo=t61rcWkgMzE")
    );
}

#[test]
fn test_missing_traceparent_starts_new_trace() {
    let headers = inbound(None, Some("rojo=00f067aa0ba902b7"));
    assert!(propagation::extract(&headers).is_none());

    let ctx = propagation::extract_or_make(&headers, true);
    assert!(ctx.tracestate.is_none());
    assert!(ctx.traceparent.is_sampled());

    let mut outbound: HashMap<String, String> = HashMap::new();
    propagation::inject(&ctx.child(None), &mut outbound);
    assert!(!outbound.contains_key(TRACESTATE_HEADER));
    assert_valid_id(&outbound[TRACEPARENT_HEADER]);
}

#[test]
fn test_repaired_traceparent_keeps_tracestate() {
    let headers = inbound(
        Some("00-00000000000000000000000000000000-b7ad6b7169203331-01"),
        Some("rojo=1"),
    );
    let ctx = propagation::extract(&headers).unwrap();
    assert!(ctx.traceparent.trace_id().is_valid());
    assert_eq!(ctx.tracestate.unwrap().get("rojo"), Some("1"));
}

#[test]
fn test_each_outbound_call_gets_own_parent_id() {
    let headers = inbound(Some(UPSTREAM), None);
    let ctx = propagation::extract(&headers).unwrap();

    let a = ctx.child(None).traceparent;
    let b = ctx.child(None).traceparent;
    assert_eq!(a.trace_id(), b.trace_id());
    assert_ne!(a.parent_id(), b.parent_id());
}

#[test]
fn test_vendor_update_before_forwarding() {
    let headers = inbound(Some(UPSTREAM), Some("rojo=00f067aa0ba902b7,congo=t61rcWkgMzE"));
    let mut ctx = propagation::extract(&headers).unwrap().child(Some(false));
    ctx.tracestate_mut().set("congo", "ucfJifl5GOE").unwrap();

    let mut outbound: HashMap<String, String> = HashMap::new();
    propagation::inject(&ctx, &mut outbound);
    assert_eq!(outbound[TRACESTATE_HEADER], "congo=ucfJifl5GOE,rojo=00f067aa0ba902b7");
    assert!(outbound[TRACEPARENT_HEADER].ends_with("-02"));
}

#[test]
fn test_dyn_carrier() {
    let headers = inbound(Some(UPSTREAM), None);
    let carrier: &dyn HeaderCarrier = &headers;
    assert!(propagation::extract(carrier).is_some());
}

#[test]
fn test_context_serializes_as_header_strings() {
    let headers = inbound(Some(UPSTREAM), Some("rojo=1"));
    let ctx = propagation::extract(&headers).unwrap();

    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["traceparent"], UPSTREAM);
    assert_eq!(json["tracestate"], "rojo=1");

    let back: TraceContext = serde_json::from_value(json).unwrap();
    assert_eq!(back, ctx);

    let root = TraceContext::root(false);
    let json = serde_json::to_value(&root).unwrap();
    assert!(json.get("tracestate").is_none());
}
