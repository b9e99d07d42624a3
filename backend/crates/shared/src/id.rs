//! Common ID Types
//!
//! Type-safe positive integer IDs for domain entities.

use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroU64;

/// Generic typed ID wrapper
///
/// Only strictly positive values can be represented.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ClientId = Id<markers::Client>;
///
/// assert!(ClientId::from_raw(1).is_some());
/// assert!(ClientId::from_raw(0).is_none());
/// assert!(ClientId::from_raw(-7).is_none());
/// ```
pub struct Id<T> {
    value: NonZeroU64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a raw integer, `None` unless it is positive
    pub fn from_raw(raw: i64) -> Option<Self> {
        let value = u64::try_from(raw).ok().and_then(NonZeroU64::new)?;
        Some(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Get the underlying integer
    pub fn get(&self) -> u64 {
        self.value.get()
    }
}

// Manual impls: derives would require `T: Clone` etc. on the marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Id<T>> for u64 {
    fn from(id: Id<T>) -> Self {
        id.get()
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for bank client IDs (individual and corporate)
    pub struct Client;
}

/// Type aliases for common IDs
pub type ClientId = Id<markers::Client>;
