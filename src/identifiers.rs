//! Domain identifier types for narrative segments.
//!
//! The story tree is authored as compile-time data, so segment names are
//! `&'static str` constants wrapped in a type-safe identifier.

use std::{borrow::Borrow, fmt};

use serde::Serialize;

/// Unique identifier for a narrative segment in the story tree.
///
/// SegmentIds name the passages of the hard-coded story. They are authored
/// constants, never parsed from input, which is why the wrapper is `Copy`
/// over a static string and only ever serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SegmentId(&'static str);

impl SegmentId {
    /// Create a new segment identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use parlor::identifiers::SegmentId;
    ///
    /// let segment = SegmentId::new("fall-back");
    /// assert_eq!(segment.as_str(), "fall-back");
    /// ```
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for SegmentId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<SegmentId> for &str {
    fn eq(&self, other: &SegmentId) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for SegmentId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for SegmentId {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for SegmentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_id_str_comparison() {
        let id = SegmentId::new("beginning");
        assert_eq!(id, "beginning");
        assert_eq!("beginning", id);
        assert_ne!(id, "fall-back");
    }

    #[test]
    fn test_segment_id_display() {
        let id = SegmentId::new("hold-the-line");
        assert_eq!(id.to_string(), "hold-the-line");
    }
}
