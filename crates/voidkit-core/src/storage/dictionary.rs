//! Term dictionary.
//!
//! Maps each distinct [`Term`] to a dense [`TermId`] and back. Terms of
//! different kinds never share an id, even when their text is the same.

use voidkit_common::utils::hash::FastHashMap;
use voidkit_common::{Error, Result, Term, TermId};

/// Bidirectional term <-> id mapping.
#[derive(Debug, Default, Clone)]
pub struct TermDictionary {
    /// Term to id.
    ids: FastHashMap<Term, TermId>,
    /// Id to term, indexed by `TermId::index`.
    terms: Vec<Term>,
}

impl TermDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `term`, assigning the next free id on first sight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DictionaryFull`] once the id space is exhausted.
    pub fn intern(&mut self, term: Term) -> Result<TermId> {
        if let Some(&id) = self.ids.get(&term) {
            return Ok(id);
        }
        let next = u32::try_from(self.terms.len())
            .ok()
            .filter(|&raw| raw <= TermId::MAX.as_u32())
            .ok_or(Error::DictionaryFull(self.terms.len()))?;
        let id = TermId::new(next);
        // The Arc inside the term is shared, not copied.
        self.ids.insert(term.clone(), id);
        self.terms.push(term);
        Ok(id)
    }

    /// Looks up an already interned term.
    #[must_use]
    pub fn get(&self, term: &Term) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Resolves an id back to its term.
    #[must_use]
    pub fn resolve(&self, id: TermId) -> Option<&Term> {
        self.terms.get(id.index())
    }

    /// Resolves an id that this dictionary handed out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] for an id from a different dictionary.
    pub fn term(&self, id: TermId) -> Result<&Term> {
        self.resolve(id)
            .ok_or_else(|| Error::Internal(format!("unknown term id {id}")))
    }

    /// Returns the number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Rough heap footprint in bytes (string payloads plus table slots).
    #[must_use]
    pub fn estimated_bytes(&self) -> usize {
        let strings: usize = self.terms.iter().map(|t| t.as_str().len()).sum();
        let slot = std::mem::size_of::<Term>() + std::mem::size_of::<TermId>();
        strings + self.terms.len() * (slot + std::mem::size_of::<Term>())
    }
}
