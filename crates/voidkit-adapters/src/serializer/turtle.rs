//! Turtle output.
//!
//! Every partition is written as its own `void:Dataset` block, parents
//! before children:
//!
//! ```text
//! <http://example.org/dataset> a void:Dataset ;
//!     void:triples 3 ;
//!     void:propertyPartition <http://example.org/dataset/property/…> ;
//!     void:classPartition <http://example.org/dataset/class/…> .
//! ```
//!
//! Counts are bare integers, which Turtle reads as `xsd:integer`. Blank nodes
//! from the source data are relabelled with a digest of their label so they
//! cannot collide with generated partition labels. Characters that may not
//! appear in an IRI are percent-encoded.

use std::fmt::Write as _;
use std::io::Write;

use voidkit_common::vocab::{rdf, void, voidext};
use voidkit_common::{Result, Term};
use voidkit_core::partition::{
    ClassPartition, ObjectClassPartition, PartitionId, PropertyPartition, hash_iri,
};
use voidkit_core::PartitionTree;

const PREFIXES: [(&str, &str); 3] = [
    ("rdf", rdf::NS),
    ("void", void::NS),
    ("voidext", voidext::NS),
];

/// Writes a partition tree as a Turtle VOID description.
pub struct TurtleSerializer;

impl TurtleSerializer {
    /// Writes `tree` to `writer`. The writer is not buffered here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](voidkit_common::Error::Io) if writing fails.
    pub fn write<W: Write>(tree: &PartitionTree, mut writer: W) -> Result<()> {
        write_prefixes(&mut writer)?;

        let dataset = &tree.dataset;
        let mut statements = vec![
            count(void::TRIPLES, dataset.triples),
            count(void::DISTINCT_SUBJECTS, dataset.distinct_subjects),
            count(void::PROPERTIES, dataset.properties),
            count(void::DISTINCT_OBJECTS, dataset.distinct_objects),
            count(void::CLASSES, dataset.classes),
        ];
        push_links(
            &mut statements,
            void::PROPERTY_PARTITION,
            dataset.property_partitions.iter().map(|p| &p.id),
        );
        push_links(
            &mut statements,
            void::CLASS_PARTITION,
            dataset.class_partitions.iter().map(|c| &c.id),
        );
        write_block(&mut writer, &dataset.id, &statements)?;

        for property in &dataset.property_partitions {
            write_property(&mut writer, property)?;
        }
        for class in &dataset.class_partitions {
            write_class(&mut writer, class)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Renders `tree` as a Turtle string.
    ///
    /// # Errors
    ///
    /// Infallible in practice; writing to a `Vec` does not fail.
    pub fn to_string(tree: &PartitionTree) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write(tree, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| voidkit_common::Error::Serialization(e.to_string()))
    }
}

fn write_prefixes<W: Write>(writer: &mut W) -> Result<()> {
    for (prefix, ns) in PREFIXES {
        writeln!(writer, "@prefix {prefix}: <{ns}> .")?;
    }
    writeln!(writer)?;
    Ok(())
}

fn write_class<W: Write>(writer: &mut W, class: &ClassPartition) -> Result<()> {
    let mut statements = vec![
        link(void::CLASS, &resource(&class.class)),
        count(void::ENTITIES, class.entities),
        count(void::TRIPLES, class.triples),
    ];
    push_links(
        &mut statements,
        void::PROPERTY_PARTITION,
        class.property_partitions.iter().map(|p| &p.id),
    );
    write_block(writer, &class.id, &statements)?;

    for property in &class.property_partitions {
        write_property(writer, property)?;
    }
    Ok(())
}

fn write_property<W: Write>(writer: &mut W, property: &PropertyPartition) -> Result<()> {
    let mut statements = vec![
        link(void::PROPERTY, &resource(&property.property)),
        count(void::TRIPLES, property.triples),
    ];
    push_links(
        &mut statements,
        voidext::OBJECT_CLASS_PARTITION,
        property.object_class_partitions.iter().map(|oc| &oc.id),
    );
    write_block(writer, &property.id, &statements)?;

    for object_class in &property.object_class_partitions {
        write_object_class(writer, object_class)?;
    }
    Ok(())
}

fn write_object_class<W: Write>(
    writer: &mut W,
    object_class: &ObjectClassPartition,
) -> Result<()> {
    let mut statements = Vec::with_capacity(2);
    if let Some(class) = &object_class.class {
        statements.push(link(void::CLASS, &resource(class)));
    }
    statements.push(count(void::TRIPLES, object_class.triples));
    write_block(writer, &object_class.id, &statements)
}

fn count(predicate: &str, value: u64) -> String {
    format!("{} {value}", prefixed(predicate))
}

fn link(predicate: &str, object: &str) -> String {
    format!("{} {object}", prefixed(predicate))
}

fn push_links<'a>(
    statements: &mut Vec<String>,
    predicate: &str,
    ids: impl Iterator<Item = &'a PartitionId>,
) {
    let objects: Vec<String> = ids.map(node).collect();
    if !objects.is_empty() {
        statements.push(link(predicate, &objects.join(" ,\n        ")));
    }
}

fn write_block<W: Write>(writer: &mut W, id: &PartitionId, statements: &[String]) -> Result<()> {
    let mut block = format!("{} a {}", node(id), prefixed(void::DATASET));
    for statement in statements {
        let _ = write!(block, " ;\n    {statement}");
    }
    block.push_str(" .\n\n");
    writer.write_all(block.as_bytes())?;
    Ok(())
}

/// Shortens `iri` to a prefixed name when it lives in a declared namespace.
fn prefixed(iri: &str) -> String {
    PREFIXES
        .iter()
        .find_map(|&(prefix, ns)| iri.strip_prefix(ns).map(|local| format!("{prefix}:{local}")))
        .unwrap_or_else(|| format!("<{}>", escape_iri(iri)))
}

fn node(id: &PartitionId) -> String {
    match id {
        PartitionId::Uri(uri) => format!("<{}>", escape_iri(uri)),
        PartitionId::Blank(label) => format!("_:{label}"),
    }
}

fn resource(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{}>", escape_iri(iri)),
        Term::BlankNode(label) => format!("_:b{}", hash_iri(label)),
        Term::Literal(encoded) => literal(encoded),
    }
}

/// Percent-encodes characters that may not appear in an IRI.
fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\u{0}'..=' ' => {
                let _ = write!(out, "%{:02X}", c as u32);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Re-emits an encoded literal as a Turtle literal.
///
/// Raw quotes, line breaks, and stray backslashes in the lexical form are
/// escaped; escape sequences that are already valid are kept. A datatype IRI
/// is escaped like any other IRI. Text without a closing quote is written as
/// a plain string.
fn literal(encoded: &str) -> String {
    let closing = encoded
        .strip_prefix('"')
        .and_then(|rest| rest.rfind('"').map(|i| i + 1));
    let (lexical, suffix) = match closing {
        Some(close) => (&encoded[1..close], &encoded[close + 1..]),
        None => (encoded, ""),
    };

    let mut out = String::with_capacity(encoded.len() + 2);
    out.push('"');
    let mut chars = lexical.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ ('t' | 'b' | 'n' | 'r' | 'f' | '"' | '\'' | '\\' | 'u' | 'U')) => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                _ => out.push_str("\\\\"),
            },
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');

    if let Some(datatype) = suffix
        .strip_prefix("^^<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        let _ = write!(out, "^^<{}>", escape_iri(datatype));
    } else if suffix.starts_with('@') {
        out.push_str(suffix);
    }
    out
}
