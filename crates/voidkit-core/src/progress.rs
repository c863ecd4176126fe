//! Progress reporting for long passes.
//!
//! Library code only logs through `tracing`; callers that want a live view
//! (the CLI spinner, for instance) plug in a [`ProgressObserver`].

use std::fmt;

/// The two scans of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Pass 1: `rdf:type` triples into the class index.
    ClassIndex,
    /// Pass 2: every triple into the counters.
    Aggregation,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassIndex => f.write_str("pass 1 (class index)"),
            Self::Aggregation => f.write_str("pass 2 (aggregation)"),
        }
    }
}

/// Receives progress notifications. Every method defaults to a no-op.
pub trait ProgressObserver {
    /// A pass is about to start. `expected` is the triple count if known.
    fn pass_started(&mut self, _pass: Pass, _expected: Option<u64>) {}

    /// `processed` triples of the pass are done.
    fn progress(&mut self, _pass: Pass, _processed: u64) {}

    /// A pass finished after `processed` triples.
    fn pass_finished(&mut self, _pass: Pass, _processed: u64) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

impl<T: ProgressObserver + ?Sized> ProgressObserver for &mut T {
    fn pass_started(&mut self, pass: Pass, expected: Option<u64>) {
        (**self).pass_started(pass, expected);
    }

    fn progress(&mut self, pass: Pass, processed: u64) {
        (**self).progress(pass, processed);
    }

    fn pass_finished(&mut self, pass: Pass, processed: u64) {
        (**self).pass_finished(pass, processed);
    }
}
