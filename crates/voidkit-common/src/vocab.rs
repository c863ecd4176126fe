//! RDF vocabulary constants.
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `void` - VOID vocabulary (http://rdfs.org/ns/void#)
//! - `voidext` - VOID extensions from ldf.fi (http://ldf.fi/void-ext#)

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// VOID vocabulary constants
pub mod void {
    /// VOID namespace
    pub const NS: &str = "http://rdfs.org/ns/void#";

    /// void:Dataset class
    pub const DATASET: &str = "http://rdfs.org/ns/void#Dataset";

    /// void:triples
    pub const TRIPLES: &str = "http://rdfs.org/ns/void#triples";

    /// void:entities
    pub const ENTITIES: &str = "http://rdfs.org/ns/void#entities";

    /// void:classes
    pub const CLASSES: &str = "http://rdfs.org/ns/void#classes";

    /// void:properties
    pub const PROPERTIES: &str = "http://rdfs.org/ns/void#properties";

    /// void:distinctSubjects
    pub const DISTINCT_SUBJECTS: &str = "http://rdfs.org/ns/void#distinctSubjects";

    /// void:distinctObjects
    pub const DISTINCT_OBJECTS: &str = "http://rdfs.org/ns/void#distinctObjects";

    /// void:class
    pub const CLASS: &str = "http://rdfs.org/ns/void#class";

    /// void:property
    pub const PROPERTY: &str = "http://rdfs.org/ns/void#property";

    /// void:classPartition
    pub const CLASS_PARTITION: &str = "http://rdfs.org/ns/void#classPartition";

    /// void:propertyPartition
    pub const PROPERTY_PARTITION: &str = "http://rdfs.org/ns/void#propertyPartition";
}

/// VOID extension vocabulary (ldf.fi)
pub mod voidext {
    /// voidext namespace
    pub const NS: &str = "http://ldf.fi/void-ext#";

    /// voidext:objectClassPartition
    pub const OBJECT_CLASS_PARTITION: &str = "http://ldf.fi/void-ext#objectClassPartition";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespace() {
        assert!(rdf::TYPE.starts_with(rdf::NS));
        for iri in [
            void::DATASET,
            void::TRIPLES,
            void::ENTITIES,
            void::CLASSES,
            void::PROPERTIES,
            void::DISTINCT_SUBJECTS,
            void::DISTINCT_OBJECTS,
            void::CLASS,
            void::PROPERTY,
            void::CLASS_PARTITION,
            void::PROPERTY_PARTITION,
        ] {
            assert!(iri.starts_with(void::NS), "{iri}");
        }
        assert!(voidext::OBJECT_CLASS_PARTITION.starts_with(voidext::NS));
    }
}
