//! Batch command - convert many page documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use shipconv_core::invoice::{ConversionResult, DocumentConverter, InvoiceConverter};
use shipconv_core::models::Document;

use super::config::load_config;
use crate::output::{write_result, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for page documents (e.g. "pages/*.json")
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each document
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of converting a single document.
struct ProcessResult {
    path: PathBuf,
    result: Option<ConversionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let converter = DocumentConverter::from_config(&config.conversion)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} documents to convert",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")?
            .progress_chars("=>-"),
    );

    // Documents are independent; each conversion stays sequential internally.
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        let permit = semaphore.clone().acquire_owned().await?;
        let converter = converter.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let file_start = Instant::now();
            let outcome = convert_file(&path, &converter);
            (path, outcome, file_start.elapsed().as_millis() as u64)
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let (path, outcome, processing_time_ms) = handle.await?;

        let outcome = outcome.and_then(|result| {
            if let Some(output_dir) = &args.output_dir {
                let output_path = output_path_for(&path, output_dir, args.format);
                write_result(&result, args.format, Some(&output_path), &config.output)?;
                debug!("Wrote output to {}", output_path.display());
            }
            Ok(result)
        });

        match outcome {
            Ok(result) => {
                results.push(ProcessResult {
                    path,
                    result: Some(result),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to convert {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        result: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to convert {}: {}", path.display(), error_msg);
                    overall_pb.abandon();
                    anyhow::bail!("Conversion failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_and_clear();

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = results.iter().filter(|r| r.result.is_some()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    eprintln!(
        "{} Converted {} documents in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!("{}", style("Failed documents:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn convert_file(path: &Path, converter: &DocumentConverter) -> anyhow::Result<ConversionResult> {
    let document = Document::from_file(path)?;
    Ok(converter.convert(&document)?)
}

fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "invoice_range",
        "po_numbers",
        "total_amount",
        "net_weight",
        "items",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(conversion) = &result.result {
            let summary = &conversion.summary;
            wtr.write_record([
                filename,
                "success",
                &summary.invoice_range,
                &summary.po_list,
                &summary.total_amount_text(),
                &summary.net_weight_text(),
                &conversion.items.len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        let path = output_path_for(
            Path::new("in/INV-1.json"),
            Path::new("out"),
            OutputFormat::Xlsx,
        );
        assert_eq!(path, PathBuf::from("out/INV-1.xlsx"));
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::from_json_str(
            r#"{"pages": [{"text": "x"}, {"text": "INVOICE: A-1\nNET WEIGHT: 2 KGS"}]}"#,
        )
        .unwrap();
        let conversion = DocumentConverter::new().convert(&doc).unwrap();

        let results = vec![
            ProcessResult {
                path: PathBuf::from("a.json"),
                result: Some(conversion),
                error: None,
                processing_time_ms: 3,
            },
            ProcessResult {
                path: PathBuf::from("b.json"),
                result: None,
                error: Some("bad input".to_string()),
                processing_time_ms: 1,
            },
        ];

        let path = dir.path().join("summary.csv");
        write_summary(&path, &results).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "a.json,success,A-1,,0,2.0,0,3,");
        assert_eq!(lines[2], "b.json,error,,,,,,1,bad input");
    }
}
