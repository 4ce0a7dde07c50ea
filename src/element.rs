use serde::{Deserialize, Serialize};

/// Serialization unit for dense payloads. The logical index is implicit
/// from the element's position in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element<T> {
    pub value: T,
}

impl<T> Element<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Serialization and in-memory unit for sparse payloads. Invariant: `index >= 0`
/// for any stored element; an index of -1 is the "not found" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexedElement<T> {
    pub index: i64,
    pub value: T,
}

impl<T> IndexedElement<T> {
    pub fn new(index: i64, value: T) -> Self {
        Self { index, value }
    }
}

impl<T: num_traits::Zero> IndexedElement<T> {
    /// Sentinel signalling "not found" in lookups.
    pub fn default_sentinel() -> Self {
        Self {
            index: -1,
            value: T::zero(),
        }
    }
}

/// Run-length encoded triple. Part of the element family for completeness;
/// the arithmetic paths do not consume it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepeatedElement<T> {
    pub index: i64,
    pub count: i64,
    pub value: T,
}

impl<T> RepeatedElement<T> {
    pub fn new(index: i64, count: i64, value: T) -> Self {
        Self {
            index,
            count,
            value,
        }
    }
}
