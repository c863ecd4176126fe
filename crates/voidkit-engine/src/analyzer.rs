//! The two-pass VOID analyzer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use voidkit_adapters::OutputFormat;
use voidkit_common::Result;
use voidkit_core::{
    ClassIndexBuilder, IdentifierGenerator, PartitionModelBuilder, PartitionTree,
    ProgressObserver, StatisticsCollector, TermDictionary, TripleSource,
};

use crate::config::VoidConfig;

/// Runs the class index pass, the aggregation pass, and the partition model
/// builder over a triple source.
///
/// # Examples
///
/// ```
/// use voidkit_common::Term;
/// use voidkit_common::vocab::rdf;
/// use voidkit_core::{MemoryTripleSource, NoProgress};
/// use voidkit_engine::{VoidAnalyzer, VoidConfig};
///
/// let mut source = MemoryTripleSource::new();
/// source.add(
///     Term::iri("http://example.org/a"),
///     Term::iri(rdf::TYPE),
///     Term::iri("http://example.org/Person"),
/// );
///
/// let analyzer = VoidAnalyzer::new(VoidConfig::default()).unwrap();
/// let description = analyzer.analyze(&source, &mut NoProgress).unwrap();
/// assert_eq!(description.summary.classes, 1);
/// ```
#[derive(Debug, Clone)]
pub struct VoidAnalyzer {
    config: VoidConfig,
}

impl VoidAnalyzer {
    /// Creates an analyzer after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](voidkit_common::Error::Config) if the
    /// configuration is rejected.
    pub fn new(config: VoidConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The run configuration.
    #[must_use]
    pub fn config(&self) -> &VoidConfig {
        &self.config
    }

    /// Analyzes `source` and builds its VOID description.
    ///
    /// # Errors
    ///
    /// A read error in either pass aborts the run; nothing partial is returned.
    pub fn analyze<S: TripleSource + ?Sized>(
        &self,
        source: &S,
        observer: &mut dyn ProgressObserver,
    ) -> Result<VoidDescription> {
        let started = Instant::now();
        let mut dictionary = TermDictionary::new();

        let index = ClassIndexBuilder::new()
            .with_progress_interval(self.config.progress_interval)
            .build(source, &mut dictionary, observer)?;

        let counters =
            StatisticsCollector::new(&index, &mut dictionary, self.config.collector_options())
                .collect(source, observer)?;

        let cells = counters.cell_count();
        tracing::info!(
            "{} counter cells, {} distinct terms (~{} bytes of term text)",
            cells,
            dictionary.len(),
            dictionary.estimated_bytes()
        );
        if cells > self.config.cell_warning_threshold {
            tracing::warn!(
                "{} counter cells exceed the warning threshold of {}; the classes x predicates x object classes product is the main memory cost, consider disabling object-class partitions",
                cells,
                self.config.cell_warning_threshold
            );
        }

        let ids = IdentifierGenerator::new(self.config.identifier_mode(), &self.config.dataset_uri);
        let tree = PartitionModelBuilder::new(&dictionary, ids).build(&counters)?;

        let summary = RunSummary {
            triples: counters.dataset.total,
            distinct_subjects: counters.dataset.distinct_subjects(),
            distinct_predicates: counters.dataset.distinct_predicates(),
            distinct_objects: counters.dataset.distinct_objects(),
            type_triples: index.type_triples(),
            typed_resources: index.resource_count() as u64,
            classes: tree.dataset.classes,
            terms: dictionary.len() as u64,
            counter_cells: cells,
            partitions: tree.nodes().len() as u64,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            "Built {} partitions for {} triples in {} ms",
            summary.partitions,
            summary.triples,
            summary.elapsed_ms
        );

        Ok(VoidDescription { tree, summary })
    }

    /// Opens the HDT file at `path` and analyzes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or a pass fails.
    #[cfg(feature = "hdt")]
    pub fn analyze_hdt(
        &self,
        path: impl AsRef<Path>,
        observer: &mut dyn ProgressObserver,
    ) -> Result<VoidDescription> {
        let source = voidkit_adapters::HdtTripleSource::open(path)?;
        self.analyze(&source, observer)
    }
}

/// Headline numbers of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Triples scanned in pass 2.
    pub triples: u64,
    /// Distinct subjects.
    pub distinct_subjects: u64,
    /// Distinct predicates.
    pub distinct_predicates: u64,
    /// Distinct objects.
    pub distinct_objects: u64,
    /// `rdf:type` triples read in pass 1.
    pub type_triples: u64,
    /// Resources with at least one class.
    pub typed_resources: u64,
    /// Class partitions.
    pub classes: u64,
    /// Distinct terms interned.
    pub terms: u64,
    /// Nested counter cells.
    pub counter_cells: u64,
    /// Nodes in the partition tree.
    pub partitions: u64,
    /// Wall-clock time of the run.
    pub elapsed_ms: u64,
}

/// A finished VOID description.
#[derive(Debug, Clone, Serialize)]
pub struct VoidDescription {
    /// The partition tree.
    pub tree: PartitionTree,
    /// Run summary.
    pub summary: RunSummary,
}

impl VoidDescription {
    /// Writes the tree to `writer` in `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<W: Write>(&self, format: OutputFormat, writer: W) -> Result<()> {
        format.write(&self.tree, writer)
    }

    /// Writes the tree to a new file at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        self.write(format, writer)?;
        tracing::info!("Wrote VOID description to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voidkit_common::vocab::rdf;
    use voidkit_common::{ConfigError, Error, Term};
    use voidkit_core::{IdentifierMode, MemoryTripleSource, NoProgress};

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{local}"))
    }

    fn people() -> MemoryTripleSource {
        let mut source = MemoryTripleSource::new();
        source.add(ex("a"), Term::iri(rdf::TYPE), ex("Person"));
        source.add(ex("a"), ex("name"), Term::literal("Alice"));
        source.add(ex("b"), ex("name"), Term::literal("Bob"));
        source
    }

    #[test]
    fn test_invalid_config_is_rejected_up_front() {
        let result = VoidAnalyzer::new(VoidConfig::new("not a uri"));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidDatasetUriChar { .. }))
        ));
    }

    #[test]
    fn test_person_scenario() {
        let analyzer = VoidAnalyzer::new(VoidConfig::default()).unwrap();
        let description = analyzer.analyze(&people(), &mut NoProgress).unwrap();

        let summary = &description.summary;
        assert_eq!(summary.triples, 3);
        assert_eq!(summary.distinct_subjects, 2);
        assert_eq!(summary.distinct_predicates, 2);
        assert_eq!(summary.type_triples, 1);
        assert_eq!(summary.typed_resources, 1);
        assert_eq!(summary.classes, 1);

        let person = description
            .tree
            .class_partition("http://example.org/Person")
            .unwrap();
        assert_eq!(person.entities, 1);
        assert_eq!(person.triples, 2);
        assert_eq!(
            person
                .property_partition("http://example.org/name")
                .unwrap()
                .triples,
            1
        );
    }

    #[test]
    fn test_config_flows_into_the_tree() {
        let config = VoidConfig::new("http://example.org/people")
            .with_blank_nodes(true)
            .with_untyped_objects(true);
        let description = VoidAnalyzer::new(config)
            .unwrap()
            .analyze(&people(), &mut NoProgress)
            .unwrap();

        assert_eq!(description.tree.mode, IdentifierMode::BlankNode);
        let person = description
            .tree
            .class_partition("http://example.org/Person")
            .unwrap();
        let name = person.property_partition("http://example.org/name").unwrap();
        assert_eq!(name.object_class_triples(None), Some(1));
    }

    #[test]
    fn test_warning_threshold_does_not_change_results() {
        let quiet = VoidAnalyzer::new(VoidConfig::default())
            .unwrap()
            .analyze(&people(), &mut NoProgress)
            .unwrap();
        let noisy = VoidAnalyzer::new(VoidConfig::default().with_cell_warning_threshold(0))
            .unwrap()
            .analyze(&people(), &mut NoProgress)
            .unwrap();
        assert_eq!(quiet.tree, noisy.tree);
    }

    #[test]
    fn test_empty_source() {
        let description = VoidAnalyzer::new(VoidConfig::default())
            .unwrap()
            .analyze(&MemoryTripleSource::new(), &mut NoProgress)
            .unwrap();
        assert_eq!(description.summary.triples, 0);
        assert_eq!(description.summary.partitions, 1);
    }

    #[test]
    fn test_save_turtle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("void.ttl");

        let description = VoidAnalyzer::new(VoidConfig::default())
            .unwrap()
            .analyze(&people(), &mut NoProgress)
            .unwrap();
        description.save(&path, OutputFormat::Turtle).unwrap();

        let ttl = std::fs::read_to_string(&path).unwrap();
        assert!(ttl.contains("<http://example.org/dataset> a void:Dataset ;"));
        assert!(ttl.contains("void:class <http://example.org/Person>"));
    }

    #[cfg(feature = "hdt")]
    #[test]
    fn test_missing_hdt_file() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = VoidAnalyzer::new(VoidConfig::default()).unwrap();
        let result = analyzer.analyze_hdt(dir.path().join("missing.hdt"), &mut NoProgress);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[cfg(feature = "hdt")]
    #[test]
    fn test_hdt_total_is_known_up_front() {
        use voidkit_core::{Pass, ProgressObserver};

        #[derive(Default)]
        struct Expected(Vec<(Pass, Option<u64>)>);

        impl ProgressObserver for Expected {
            fn pass_started(&mut self, pass: Pass, expected: Option<u64>) {
                self.0.push((pass, expected));
            }
        }

        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../voidkit-adapters/tests/data/snikmeta.hdt"
        );
        let mut observer = Expected::default();
        let description = VoidAnalyzer::new(VoidConfig::default())
            .unwrap()
            .analyze_hdt(path, &mut observer)
            .unwrap();

        assert_eq!(description.summary.triples, 328);
        assert!(observer.0.contains(&(Pass::Aggregation, Some(328))));
    }
}
