//! voidkit CLI - VOID descriptions for HDT datasets.
//!
//! Reads an HDT file twice (once for `rdf:type`, once for everything) and
//! writes exact dataset, class, property, and object-class statistics.

mod commands;
mod output;
mod progress;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use voidkit_core::index::class_index::DEFAULT_PROGRESS_INTERVAL;
use voidkit_engine::{DEFAULT_CELL_WARNING_THRESHOLD, DEFAULT_DATASET_URI, VoidConfig};

/// Generate VOID vocabulary descriptions from HDT files.
#[derive(Parser)]
#[command(name = "voidkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for summaries
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Format of the written VOID description.
#[derive(Clone, Copy, ValueEnum, Default)]
enum DescriptionFormat {
    /// RDF Turtle
    #[default]
    Turtle,
    /// JSON dump of the partition tree
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Write the VOID description of an HDT file
    Generate {
        /// Path to the input HDT file
        hdt_file: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Format of the output file
        #[arg(long, default_value = "turtle")]
        output_format: DescriptionFormat,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Print dataset statistics and the class partition table
    Stats {
        /// Path to the input HDT file
        hdt_file: PathBuf,

        /// Show at most this many classes (largest first)
        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },
}

/// Options shared by every analysis command.
#[derive(Args)]
struct AnalysisArgs {
    /// URI for the dataset being described
    #[arg(long, default_value = DEFAULT_DATASET_URI)]
    dataset_uri: String,

    /// Use blank nodes for partition nodes instead of URI references
    #[arg(long)]
    use_blank_nodes: bool,

    /// Skip object-class partitions (faster on heterogeneous data)
    #[arg(long)]
    no_object_classes: bool,

    /// Count literal and untyped objects in their own object-class partition
    #[arg(long, conflicts_with = "no_object_classes")]
    untyped_objects: bool,

    /// Triples between progress updates
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Counter cell count above which a memory warning is logged
    #[arg(long, default_value_t = DEFAULT_CELL_WARNING_THRESHOLD)]
    cell_warning_threshold: u64,
}

impl AnalysisArgs {
    fn config(&self) -> VoidConfig {
        VoidConfig::new(self.dataset_uri.clone())
            .with_blank_nodes(self.use_blank_nodes)
            .with_object_class_partitions(!self.no_object_classes)
            .with_untyped_objects(self.untyped_objects)
            .with_progress_interval(self.progress_interval)
            .with_cell_warning_threshold(self.cell_warning_threshold)
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Generate {
            hdt_file,
            output,
            output_format,
            analysis,
        } => commands::generate::run(
            &hdt_file,
            &output,
            output_format,
            &analysis.config(),
            cli.format,
            cli.quiet,
        ),
        Commands::Stats {
            hdt_file,
            limit,
            analysis,
        } => commands::stats::run(&hdt_file, limit, &analysis.config(), cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
