//! Bounded, recency-ordered tracestate store.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::{TracestateError, TracestateResult, MAX_ENTRIES};
use super::validation::{valid_key, valid_value};

/// Ordered vendor key/value list of at most [`MAX_ENTRIES`] members.
///
/// The front of the list is the most recently set entry, which is also the
/// leftmost member on the wire. Setting an existing key moves it to the front;
/// setting a new key on a full list evicts the entry at the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracestate {
    entries: VecDeque<(String, String)>,
}

impl Tracestate {
    /// An empty tracestate.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_ENTRIES),
        }
    }

    /// A tracestate seeded from `initial`, first element most recent.
    ///
    /// Every pair is validated like [`Tracestate::set`]; one bad pair fails
    /// the whole call. Past [`MAX_ENTRIES`] the trailing pairs are dropped.
    pub fn with_entries<I, K, V>(initial: I) -> TracestateResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        let pairs = initial
            .into_iter()
            .map(|(key, value)| validate(key.as_ref(), value.to_string()))
            .collect::<TracestateResult<Vec<_>>>()?;

        Ok(Self::from_valid(pairs))
    }

    /// Parse a header value, see [`crate::tracestate::parse`].
    pub fn parse(value: &str) -> Self {
        let pairs = value
            .split(',')
            .filter_map(|member| {
                // Members without '=' (e.g. empty ones from ",,") are skipped.
                let (key, value) = member.split_once('=')?;
                let key = key.trim().to_ascii_lowercase();
                let value = value.trim_end();

                if valid_key(&key) && valid_value(value) {
                    Some((key, value.to_string()))
                } else {
                    tracing::trace!(member, "tracestate member dropped: invalid key or value");
                    None
                }
            })
            .collect::<Vec<_>>();

        Self::from_valid(pairs)
    }

    /// Insert or update `key`, making it the most recent entry.
    ///
    /// The key is trimmed and lower-cased before validation. On error the
    /// store is left exactly as it was.
    pub fn set(&mut self, key: &str, value: impl fmt::Display) -> TracestateResult<&mut Self> {
        let (key, value) = validate(key, value.to_string())?;
        self.insert(key, value);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Remove `key`, returning its value. Order of the rest is unchanged.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.position(key)?;
        self.entries.remove(pos).map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build from pairs that already passed validation, first most recent.
    fn from_valid(pairs: Vec<(String, String)>) -> Self {
        let mut state = Self::new();
        for (key, value) in pairs.into_iter().rev() {
            state.insert(key, value);
        }
        state
    }

    fn insert(&mut self, key: String, value: String) {
        if let Some(pos) = self.position(&key) {
            self.entries.remove(pos);
        } else if self.entries.len() >= MAX_ENTRIES {
            if let Some((evicted, _)) = self.entries.pop_back() {
                tracing::trace!(key = %evicted, "tracestate full: evicted oldest entry");
            }
        }
        self.entries.push_front((key, value));
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

fn validate(key: &str, value: String) -> TracestateResult<(String, String)> {
    let key = key.trim().to_ascii_lowercase();
    if !valid_key(&key) {
        return Err(TracestateError::InvalidKey(key));
    }
    if !valid_value(&value) {
        return Err(TracestateError::InvalidValue { key, value });
    }
    Ok((key, value))
}

impl fmt::Display for Tracestate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().take(MAX_ENTRIES).enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

impl FromStr for Tracestate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a Tracestate {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for Tracestate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tracestate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}
