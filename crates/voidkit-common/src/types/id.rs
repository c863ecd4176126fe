//! Identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier for an interned RDF term.
///
/// Ids are handed out in first-seen order by the term dictionary, so they
/// double as indexes into its term table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TermId(u32);

impl TermId {
    /// Largest id the dictionary can hand out.
    pub const MAX: TermId = TermId(u32::MAX - 1);

    /// Creates a new term id.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the id as a table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl From<TermId> for u32 {
    fn from(id: TermId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_id_basics() {
        let id = TermId::new(42);
        assert_eq!(id.as_u32(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(u32::from(id), 42);
        assert_eq!(id.to_string(), "t42");
    }

    #[test]
    fn test_term_id_ordering() {
        assert!(TermId::new(1) < TermId::new(2));
        assert!(TermId::new(7) < TermId::MAX);
    }
}
