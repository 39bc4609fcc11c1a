//! Header carrier abstraction.

use std::collections::{BTreeMap, HashMap};

/// Name of the traceparent header.
pub const TRACEPARENT_HEADER: &str = "traceparent";
/// Name of the tracestate header.
pub const TRACESTATE_HEADER: &str = "tracestate";

/// Something headers can be read from and written to.
pub trait HeaderCarrier {
    /// Get a header value by exact name.
    fn get(&self, name: &str) -> Option<&str>;
    /// Set a header value, replacing any previous one.
    fn set(&mut self, name: &str, value: String);
}

impl HeaderCarrier for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: String) {
        self.insert(name.to_string(), value);
    }
}

impl HeaderCarrier for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: String) {
        self.insert(name.to_string(), value);
    }
}
