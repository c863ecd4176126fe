//! Dataset statistics command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Cell;
use voidkit_core::partition::ClassPartition;
use voidkit_engine::{VoidAnalyzer, VoidConfig};

use crate::OutputFormat;
use crate::commands::generate::summary_items;
use crate::output::{self, Format};
use crate::progress::SpinnerProgress;

/// Run the stats command.
pub fn run(
    hdt_file: &Path,
    limit: Option<usize>,
    config: &VoidConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let analyzer = VoidAnalyzer::new(config.clone())?;

    let mut progress = SpinnerProgress::new(quiet);
    let result = analyzer.analyze_hdt(hdt_file, &mut progress);
    progress.finish();
    let description =
        result.with_context(|| format!("failed to analyze {}", hdt_file.display()))?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&description, quiet)?,
        Format::Table => {
            output::print_key_value_table(&summary_items(&description.summary), quiet);

            let classes = largest_first(&description.tree.dataset.class_partitions, limit);
            if classes.is_empty() {
                output::status("No typed resources found.", quiet);
            } else if !quiet {
                let mut table = output::create_table();
                output::add_header(&mut table, &["Class", "Entities", "Triples", "Properties"]);
                for class in &classes {
                    table.add_row(vec![
                        Cell::new(class.class.as_str()),
                        output::count_cell(class.entities),
                        output::count_cell(class.triples),
                        output::count_cell(class.property_partitions.len() as u64),
                    ]);
                }
                println!("{table}");

                let total = description.tree.dataset.class_partitions.len();
                if classes.len() < total {
                    println!("({} of {} classes shown)", classes.len(), total);
                }
            }
        }
    }

    Ok(())
}

/// Class partitions by descending triple count, ties in first-seen order.
fn largest_first(classes: &[ClassPartition], limit: Option<usize>) -> Vec<&ClassPartition> {
    let mut sorted: Vec<_> = classes.iter().collect();
    sorted.sort_by(|a, b| b.triples.cmp(&a.triples));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}
