//! Convert command - turn a single page document into the output table.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use shipconv_core::invoice::{DocumentConverter, InvoiceConverter};
use shipconv_core::models::Document;

use super::config::load_config;
use crate::output::{write_result, OutputFormat};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Page document (JSON from the document layer), or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout; XLSX defaults to the configured file name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Show conversion statistics
    #[arg(long)]
    show_stats: bool,
}

pub async fn run(args: ConvertArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let document = read_document(&args.input)?;
    info!(
        "Loaded {} pages from {}",
        document.page_count(),
        args.input.display()
    );

    let converter = DocumentConverter::from_config(&config.conversion)?;
    let result = converter.convert(&document)?;

    let output_path = match (&args.output, args.format) {
        (Some(path), _) => Some(path.clone()),
        (None, OutputFormat::Xlsx) => Some(PathBuf::from(&config.output.file_name)),
        (None, _) => None,
    };

    write_result(&result, args.format, output_path.as_deref(), &config.output)?;

    if let Some(path) = &output_path {
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    }

    if args.show_stats {
        let stats = &result.stats;
        eprintln!();
        eprintln!(
            "{} Pages: {} ({} skipped)",
            style("ℹ").blue(),
            stats.pages_seen,
            stats.pages_skipped
        );
        eprintln!(
            "{} Tables: {} ({} without header), rows dropped: {}",
            style("ℹ").blue(),
            stats.tables_scanned,
            stats.tables_without_header,
            stats.rows_dropped
        );
        eprintln!(
            "{} Items: {} in {}ms",
            style("ℹ").blue(),
            stats.items,
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a page document from a file, or from stdin for "-".
pub fn read_document(input: &Path) -> anyhow::Result<Document> {
    if input == Path::new("-") {
        return Ok(Document::from_reader(std::io::stdin().lock())?);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(Document::from_file(input)?)
}
