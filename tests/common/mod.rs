//! Shared assertions for the integration tests.

/// Assert `id` is a canonical version-00-compatible traceparent: lowercase
/// hex, version not `ff`, trace id and parent id not all-zero.
#[allow(dead_code)]
pub fn assert_valid_id(id: &str) {
    let segments: Vec<&str> = id.split('-').collect();
    assert_eq!(segments.len(), 4, "{id}: segment count");

    let lower_hex = |s: &str| s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    let widths = [2, 32, 16, 2];
    for (segment, width) in segments.iter().zip(widths) {
        assert_eq!(segment.len(), width, "{id}: width of {segment}");
        assert!(lower_hex(*segment), "{id}: {segment} is not lowercase hex");
    }

    assert_ne!(segments[0], "ff", "{id}: reserved version");
    assert!(segments[1].bytes().any(|b| b != b'0'), "{id}: all-zero trace id");
    assert!(segments[2].bytes().any(|b| b != b'0'), "{id}: all-zero parent id");
}

/// `tracestate` value holding `bar01=01` .. `bar{n}={n}`, zero-padded.
#[allow(dead_code)]
pub fn numbered_tracestate(n: usize) -> String {
    (1..=n)
        .map(|i| format!("bar{i:02}={i:02}"))
        .collect::<Vec<_>>()
        .join(",")
}
