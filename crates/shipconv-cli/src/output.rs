//! Serialization of converted tables to CSV, JSON, text and XLSX.

use std::fs;
use std::path::Path;

use console::style;
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use shipconv_core::models::OutputConfig;
use shipconv_core::{ConversionResult, ConvertedTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV table with a header row
    Csv,
    /// JSON with items, summary and table
    Json,
    /// Plain text summary
    Text,
    /// Excel workbook (requires an output path)
    Xlsx,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Text => "txt",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Write a conversion result in the requested format.
///
/// Text formats go to stdout when no path is given. XLSX always needs a path.
pub fn write_result(
    result: &ConversionResult,
    format: OutputFormat,
    path: Option<&Path>,
    config: &OutputConfig,
) -> anyhow::Result<()> {
    let content = match format {
        OutputFormat::Csv => format_csv(&result.table, config.csv_delimiter)?,
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => format_text(result),
        OutputFormat::Xlsx => {
            let path =
                path.ok_or_else(|| anyhow::anyhow!("XLSX output requires an output path"))?;
            return write_xlsx(&result.table, path, &config.sheet_name);
        }
    };

    match path {
        Some(path) => {
            fs::write(path, content)?;
            debug!("Wrote output to {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}

pub fn format_csv(table: &ConvertedTable, delimiter: char) -> anyhow::Result<String> {
    if !delimiter.is_ascii() {
        anyhow::bail!("CSV delimiter must be an ASCII character");
    }
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter as u8)
        .from_writer(vec![]);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row.cells())?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn format_text(result: &ConversionResult) -> String {
    let mut output = String::new();
    let summary = &result.summary;

    output.push_str(&format!("{}\n", style("Line items").bold()));
    if result.items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in &result.items {
        output.push_str(&format!(
            "  {:>4}  {}  {} {} @ {} = {}",
            item.item_number,
            item.description,
            item.quantity,
            item.unit,
            item.unit_price,
            item.amount
        ));
        if !item.term.is_empty() {
            output.push_str(&format!("  [{}]", item.term));
        }
        output.push('\n');
    }
    output.push('\n');

    output.push_str(&format!("{}\n", style("Summary").bold()));
    output.push_str(&format!("  Invoice No.:  {}\n", summary.invoice_range));
    output.push_str(&format!("  PO No.:       {}\n", summary.po_list));
    output.push_str(&format!("  Total amount: {}\n", summary.total_amount_text()));
    output.push_str(&format!("  Net weight:   {}\n", summary.net_weight_text()));

    output
}

pub fn write_xlsx(table: &ConvertedTable, path: &Path, sheet_name: &str) -> anyhow::Result<()> {
    let mut workbook = build_workbook(table, sheet_name)?;
    workbook.save(path)?;
    debug!("Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}

/// Lay out the table on a single sheet; the header row is bold.
fn build_workbook(table: &ConvertedTable, sheet_name: &str) -> anyhow::Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();
    for (row, col, value) in sheet_cells(table) {
        if row == 0 {
            worksheet.write_string_with_format(row, col, value, &header_format)?;
        } else {
            worksheet.write_string(row, col, value)?;
        }
    }

    Ok(workbook)
}

/// Non-empty cells as (row, column, value); row 0 holds the headers.
fn sheet_cells(table: &ConvertedTable) -> Vec<(u32, u16, &str)> {
    let header = std::iter::once(table.headers.as_slice());
    let rows = table.rows.iter().map(|row| row.cells());

    header
        .chain(rows)
        .enumerate()
        .flat_map(|(row_idx, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, value)| !value.is_empty())
                .map(move |(col, value)| (row_idx as u32, col as u16, value.as_str()))
        })
        .collect()
}
