//! VOID description generation command.

use std::path::Path;

use anyhow::{Context, Result};
use voidkit_adapters::OutputFormat as FileFormat;
use voidkit_engine::{RunSummary, VoidAnalyzer, VoidConfig};

use crate::output::{self, Format, format_count, format_duration};
use crate::progress::SpinnerProgress;
use crate::{DescriptionFormat, OutputFormat};

impl From<DescriptionFormat> for FileFormat {
    fn from(f: DescriptionFormat) -> Self {
        match f {
            DescriptionFormat::Turtle => FileFormat::Turtle,
            DescriptionFormat::Json => FileFormat::Json,
        }
    }
}

/// Run the generate command.
pub fn run(
    hdt_file: &Path,
    output: &Path,
    output_format: DescriptionFormat,
    config: &VoidConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let analyzer = VoidAnalyzer::new(config.clone())?;

    output::status(&format!("Processing HDT file: {}", hdt_file.display()), quiet);
    let mut progress = SpinnerProgress::new(quiet);
    let result = analyzer.analyze_hdt(hdt_file, &mut progress);
    progress.finish();
    let description =
        result.with_context(|| format!("failed to analyze {}", hdt_file.display()))?;

    description
        .save(output, output_format.into())
        .with_context(|| format!("failed to write {}", output.display()))?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&description.summary, quiet)?,
        Format::Table => {
            output::print_key_value_table(&summary_items(&description.summary), quiet);
            output::success(&format!("Wrote {}", output.display()), quiet);
        }
    }

    Ok(())
}

/// Rows of the run summary table.
pub fn summary_items(summary: &RunSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Triples", format_count(summary.triples)),
        ("Distinct Subjects", format_count(summary.distinct_subjects)),
        ("Properties", format_count(summary.distinct_predicates)),
        ("Distinct Objects", format_count(summary.distinct_objects)),
        ("Type Triples", format_count(summary.type_triples)),
        ("Typed Resources", format_count(summary.typed_resources)),
        ("Classes", format_count(summary.classes)),
        ("Partitions", format_count(summary.partitions)),
        ("Counter Cells", format_count(summary.counter_cells)),
        ("Elapsed", format_duration(summary.elapsed_ms)),
    ]
}
