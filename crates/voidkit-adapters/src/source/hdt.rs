//! HDT file triple source.
//!
//! Opens a Header-Dictionary-Triples file once and iterates its triples in
//! the file's native SPO order as many times as needed. Iteration order is
//! fixed for a given file, so every pass sees the same sequence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ::hdt::Hdt;
use voidkit_common::{Error, Result, Term, Triple};
use voidkit_core::{TripleIter, TripleSource};

/// Triple source over an HDT file.
pub struct HdtTripleSource {
    hdt: Hdt,
    path: Option<PathBuf>,
}

impl HdtTripleSource {
    /// Opens and loads the HDT file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened and
    /// [`Error::Source`] if it is not a readable HDT file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let hdt = Hdt::new(BufReader::new(file))
            .map_err(|e| Error::Source(format!("{}: {e}", path.display())))?;
        tracing::info!("Loaded HDT file {}", path.display());

        Ok(Self {
            hdt,
            path: Some(path.to_path_buf()),
        })
    }

    /// Loads HDT data from an already opened reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] if the data is not valid HDT.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let hdt = Hdt::new(reader).map_err(Error::source)?;
        Ok(Self { hdt, path: None })
    }

    /// The file this source was opened from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl TripleSource for HdtTripleSource {
    fn triples(&self) -> Result<TripleIter<'_>> {
        Ok(Box::new(self.hdt.triples().map(|(s, p, o)| Ok(triple(s, p, o)))))
    }

    fn triples_with_predicate<'a>(&'a self, predicate: &'a str) -> Result<TripleIter<'a>> {
        Ok(Box::new(
            self.hdt
                .triples_with_pattern(None, Some(predicate), None)
                .map(|(s, p, o)| Ok(triple(s, p, o))),
        ))
    }

    fn triple_count_hint(&self) -> Option<u64> {
        // The object layer holds one entry per triple.
        Some(self.hdt.triples.adjlist_z.len() as u64)
    }
}

impl std::fmt::Debug for HdtTripleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdtTripleSource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn triple(subject: Arc<str>, predicate: Arc<str>, object: Arc<str>) -> Triple {
    Triple::new(
        Term::from_encoded_arc(subject),
        Term::Iri(predicate),
        Term::from_encoded_arc(object),
    )
}
