//! RDF terms and triples.
//!
//! Terms keep their text behind an `Arc<str>` so that the dictionary, the
//! class index, and the partition model can share one copy of each string.
//! Literals are stored in their N-Triples encoded form (quotes, escapes,
//! datatype or language tag included), which is also the form HDT
//! dictionaries hand out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The three kinds of RDF term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    /// An IRI reference.
    Iri,
    /// A blank node.
    BlankNode,
    /// A literal value.
    Literal,
}

/// An RDF term as it appears in a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    /// IRI, stored without angle brackets.
    Iri(Arc<str>),
    /// Blank node label, stored without the `_:` prefix.
    BlankNode(Arc<str>),
    /// Literal in N-Triples encoded form, e.g. `"Alice"@en`.
    Literal(Arc<str>),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<Arc<str>>) -> Self {
        Self::Iri(iri.into())
    }

    /// Creates a blank node term.
    pub fn blank(label: impl Into<Arc<str>>) -> Self {
        Self::BlankNode(label.into())
    }

    /// Creates a plain string literal from its lexical form.
    pub fn literal(lexical: &str) -> Self {
        Self::Literal(Arc::from(quote(lexical)))
    }

    /// Creates a datatyped literal.
    pub fn typed_literal(lexical: &str, datatype: &str) -> Self {
        Self::Literal(Arc::from(format!("{}^^<{}>", quote(lexical), datatype)))
    }

    /// Creates a language-tagged literal.
    pub fn lang_literal(lexical: &str, lang: &str) -> Self {
        Self::Literal(Arc::from(format!("{}@{}", quote(lexical), lang)))
    }

    /// Parses a term from its encoded string form.
    ///
    /// Accepts the HDT dictionary encoding (bare IRIs, `_:label` blank nodes,
    /// quoted literals) as well as N-Triples style `<iri>` references.
    pub fn from_encoded(encoded: &str) -> Self {
        Self::from_encoded_arc(Arc::from(encoded))
    }

    /// Like [`Term::from_encoded`], but reuses `encoded` as the term text
    /// when no prefix or brackets have to be removed.
    pub fn from_encoded_arc(encoded: Arc<str>) -> Self {
        if encoded.starts_with('"') {
            Self::Literal(encoded)
        } else if let Some(label) = encoded.strip_prefix("_:") {
            Self::BlankNode(Arc::from(label))
        } else if let Some(inner) = encoded
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Self::Iri(Arc::from(inner))
        } else {
            Self::Iri(encoded)
        }
    }

    /// Returns the kind of this term.
    #[must_use]
    pub fn kind(&self) -> TermKind {
        match self {
            Self::Iri(_) => TermKind::Iri,
            Self::BlankNode(_) => TermKind::BlankNode,
            Self::Literal(_) => TermKind::Literal,
        }
    }

    /// Returns the raw text: the IRI, the blank node label, or the encoded literal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Iri(s) | Self::BlankNode(s) | Self::Literal(s) => s,
        }
    }

    /// Returns true for literals.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns true for IRIs and blank nodes, the terms that can carry `rdf:type`.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    /// Returns true if this term is the IRI `iri`.
    #[must_use]
    pub fn is_iri(&self, iri: &str) -> bool {
        matches!(self, Self::Iri(s) if &**s == iri)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(label) => write!(f, "_:{label}"),
            Self::Literal(encoded) => f.write_str(encoded),
        }
    }
}

fn quote(lexical: &str) -> String {
    let mut out = String::with_capacity(lexical.len() + 2);
    out.push('"');
    for c in lexical.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// An RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate (IRI).
    pub predicate: Term,
    /// Object (any term).
    pub object: Term,
}

impl Triple {
    /// Creates a new triple.
    #[must_use]
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
