//! # World State Entities
//!
//! Keys are plain strings compared byte-wise. Values are opaque.

use std::ops::Bound;

/// A single (key, value) pair as observed by a caller.
///
/// Always a copy; the backend keeps the committed representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateEntry {
    /// Caller-chosen key.
    pub key: String,
    /// Raw value bytes.
    pub value: Vec<u8>,
}

impl StateEntry {
    /// Create a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Half-open key interval `[start, end)`.
///
/// An empty `end` leaves the range unbounded above, matching the host
/// platform's convention for open-ended scans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRange {
    pub start: String,
    pub end: String,
}

impl KeyRange {
    /// Create a new range.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// True when `end` is empty.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.end.is_empty()
    }

    /// True when no key can fall inside the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_unbounded() && self.start >= self.end
    }

    /// Bounds suitable for `BTreeMap::range`.
    ///
    /// Callers must check `is_empty` first: `BTreeMap::range` panics when
    /// start is greater than end.
    pub fn bounds(&self) -> (Bound<&str>, Bound<&str>) {
        let upper = if self.is_unbounded() {
            Bound::Unbounded
        } else {
            Bound::Excluded(self.end.as_str())
        };
        (Bound::Included(self.start.as_str()), upper)
    }
}
