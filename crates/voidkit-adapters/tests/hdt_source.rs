//! Reading a real HDT file.

#![cfg(feature = "hdt")]

use voidkit_adapters::HdtTripleSource;
use voidkit_common::vocab::rdf;
use voidkit_core::TripleSource;

const SNIKMETA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/snikmeta.hdt");

fn open() -> HdtTripleSource {
    HdtTripleSource::open(SNIKMETA).unwrap()
}

#[test]
fn test_count_hint_matches_full_scan() {
    let source = open();
    let scanned = source.triples().unwrap().count() as u64;
    assert_eq!(scanned, 328);
    assert_eq!(source.triple_count_hint(), Some(scanned));
}

#[test]
fn test_type_view_streams() {
    let source = open();
    let view = source.triples_with_predicate(rdf::TYPE).unwrap();
    // A pre-collected view would report an exact length before the first item.
    assert_eq!(view.size_hint().1, None);

    let typed: Vec<_> = view.map(Result::unwrap).collect();
    assert!(!typed.is_empty());
    assert!(typed.iter().all(|t| t.predicate.is_iri(rdf::TYPE)));

    let from_full_scan = source
        .triples()
        .unwrap()
        .map(Result::unwrap)
        .filter(|t| t.predicate.is_iri(rdf::TYPE))
        .count();
    assert_eq!(typed.len(), from_full_scan);
}

#[test]
fn test_type_view_for_owned_predicate() {
    let source = open();
    let predicate = String::from(rdf::TYPE);
    let count = source.triples_with_predicate(&predicate).unwrap().count();
    assert!(count > 0);
}

#[test]
fn test_unknown_predicate_is_empty() {
    let source = open();
    let view = source
        .triples_with_predicate("http://example.org/not-in-the-file")
        .unwrap();
    assert_eq!(view.count(), 0);
}

#[test]
fn test_scans_are_restartable() {
    let source = open();
    let first: Vec<_> = source.triples().unwrap().map(Result::unwrap).collect();
    let second: Vec<_> = source.triples().unwrap().map(Result::unwrap).collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|t| t.subject.is_resource()));
}
