//! Page-by-page conversion of a document into line items and a footer.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use super::aggregate::Aggregator;
use super::assemble::assemble_table;
use super::classifier::classify_table;
use super::fields::extract_fields;
use super::normalize::{RowMapper, TrailingColumnMapper};
use super::rules::parse_decimal;
use super::{InvoiceConverter, Result};
use crate::error::ConvertError;
use crate::models::{
    ConversionConfig, ConvertedTable, Document, DocumentSummary, LineItem, PageInput,
};

/// Counters describing what the conversion saw and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Pages in the document, cover page included.
    pub pages_seen: usize,
    /// Leading pages plus pages without text.
    pub pages_skipped: usize,
    pub tables_scanned: usize,
    pub tables_without_header: usize,
    /// Rows after a header that failed classification.
    pub rows_dropped: usize,
    pub items: usize,
}

/// Result of converting one document.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Item rows followed by the footer.
    pub table: ConvertedTable,
    /// Line items in encounter order.
    pub items: Vec<LineItem>,
    /// Rendered aggregates.
    pub summary: DocumentSummary,
    pub stats: ConversionStats,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// State threaded through the pages.
#[derive(Debug, Default)]
struct Accumulator {
    aggregator: Aggregator,
    items: Vec<LineItem>,
    stats: ConversionStats,
}

/// Converts page data into the output table.
///
/// Pages are processed strictly in document order; item order in the output
/// is page order, then table order, then row order.
#[derive(Debug, Clone)]
pub struct DocumentConverter<M = TrailingColumnMapper> {
    /// Number of leading pages to ignore.
    skip_leading_pages: usize,
    /// Row-to-item mapping.
    mapper: M,
}

impl DocumentConverter {
    /// Create a converter with default settings.
    pub fn new() -> Self {
        Self {
            skip_leading_pages: 1,
            mapper: TrailingColumnMapper::default(),
        }
    }

    /// Create a converter from configuration.
    pub fn from_config(config: &ConversionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            skip_leading_pages: config.skip_leading_pages,
            mapper: TrailingColumnMapper::new(config.description_prefix.as_str()),
        })
    }
}

impl Default for DocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RowMapper> DocumentConverter<M> {
    /// Replace the row mapping.
    pub fn with_mapper<N: RowMapper>(self, mapper: N) -> DocumentConverter<N> {
        DocumentConverter {
            skip_leading_pages: self.skip_leading_pages,
            mapper,
        }
    }

    /// Convert pages in document order.
    pub fn convert_pages(&self, pages: &[PageInput]) -> Result<ConversionResult> {
        let start = Instant::now();

        info!("Converting document with {} pages", pages.len());

        let mut acc = pages
            .iter()
            .enumerate()
            .skip(self.skip_leading_pages)
            .try_fold(Accumulator::default(), |acc, (index, page)| {
                self.fold_page(acc, index + 1, page)
            })?;

        // Each amount is finite, but the running sum can still overflow.
        let total_amount = acc.aggregator.total_amount();
        if !total_amount.is_finite() {
            return Err(ConvertError::parse(
                "total amount",
                total_amount.to_string(),
            ));
        }

        acc.stats.pages_seen = pages.len();
        acc.stats.pages_skipped += pages.len().min(self.skip_leading_pages);
        acc.stats.items = acc.items.len();

        let summary = acc.aggregator.finish();
        let table = assemble_table(&acc.items, &summary);

        debug!(
            "Conversion stats: {} tables, {} without header, {} rows dropped",
            acc.stats.tables_scanned, acc.stats.tables_without_header, acc.stats.rows_dropped
        );
        info!(
            "Converted {} items (invoices: {:?}, total amount: {})",
            acc.stats.items,
            summary.invoice_range,
            summary.total_amount_text()
        );

        Ok(ConversionResult {
            table,
            items: acc.items,
            summary,
            stats: acc.stats,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn fold_page(
        &self,
        mut acc: Accumulator,
        page_number: usize,
        page: &PageInput,
    ) -> Result<Accumulator> {
        let Some(text) = page.text() else {
            debug!("Page {} has no text, skipping", page_number);
            acc.stats.pages_skipped += 1;
            return Ok(acc);
        };

        let fields = extract_fields(text)?;
        debug!(
            "Page {}: invoice={:?} po={:?} net_weight={:?} ncv={}",
            page_number,
            fields.invoice_number,
            fields.po_number,
            fields.net_weight_kg,
            fields.is_no_commercial_value
        );
        acc.aggregator.add_fields(&fields);
        let term = fields.term();

        for grid in &page.table_grids {
            acc.stats.tables_scanned += 1;

            let classified = classify_table(grid);
            if classified.header_index.is_none() {
                debug!("Page {}: table without header row, skipping", page_number);
                acc.stats.tables_without_header += 1;
                continue;
            }
            acc.stats.rows_dropped += classified.dropped;

            for row in &classified.item_rows {
                let item = self.mapper.map_row(row, term);
                if !item.amount.is_empty() {
                    acc.aggregator.add_amount(parse_decimal("amount", &item.amount)?);
                }
                acc.items.push(item);
            }
        }

        Ok(acc)
    }
}

impl<M: RowMapper> InvoiceConverter for DocumentConverter<M> {
    fn convert(&self, document: &Document) -> Result<ConversionResult> {
        self.convert_pages(&document.pages)
    }
}
