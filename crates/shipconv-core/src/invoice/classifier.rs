//! Header detection and item-row filtering for page table grids.

use tracing::trace;

use super::rules::patterns::{HEADER_ITEM_TOKEN, HEADER_QUANTITY_TOKEN, TOTAL_ROW_TOKEN};
use crate::models::TableGrid;

/// Rows shorter than this cannot hold an item.
pub const MIN_ITEM_CELLS: usize = 5;

/// A table row with every cell trimmed and embedded newlines collapsed.
/// Absent cells become empty strings, so the width matches the source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRow {
    cells: Vec<String>,
}

impl CleanRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn from_raw(row: &[Option<String>]) -> Self {
        let cells = row
            .iter()
            .map(|cell| match cell.as_deref() {
                Some(text) if !text.is_empty() => text.replace('\n', " ").trim().to_string(),
                _ => String::new(),
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`, or `""` when the row is narrower.
    pub fn get(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", String::as_str)
    }

    /// Cell counted from the end (1 = last), if the row is wide enough.
    pub fn from_end(&self, position: usize) -> Option<&str> {
        self.cells
            .len()
            .checked_sub(position)
            .and_then(|index| self.cells.get(index))
            .map(String::as_str)
    }
}

/// Why a candidate row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    /// No text at all, or a totals row.
    BlankOrTotal,
    /// Fewer than [`MIN_ITEM_CELLS`] cells.
    TooNarrow,
    /// First cell is not an all-digit item number.
    NotAnItemNumber,
}

/// Outcome of classifying one table grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTable {
    /// Index of the header row, if one was found.
    pub header_index: Option<usize>,
    /// Rows that passed every filter, in table order.
    pub item_rows: Vec<CleanRow>,
    /// Candidate rows after the header that were dropped.
    pub dropped: usize,
}

/// Join the non-empty cells of a row with single spaces.
fn joined_text(row: &[Option<String>]) -> String {
    row.iter()
        .filter_map(|cell| cell.as_deref())
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_item_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Find the header row: the first row whose text contains both "ITEM" and "Q'TY".
pub fn find_header_row(grid: &TableGrid) -> Option<usize> {
    grid.rows.iter().position(|row| {
        let text = joined_text(row);
        text.contains(HEADER_ITEM_TOKEN) && text.contains(HEADER_QUANTITY_TOKEN)
    })
}

/// Apply the item-row filters to one candidate row.
pub fn classify_row(row: &[Option<String>]) -> Result<CleanRow, RowRejection> {
    let text = joined_text(row);
    if text.trim().is_empty() || text.to_uppercase().contains(TOTAL_ROW_TOKEN) {
        return Err(RowRejection::BlankOrTotal);
    }

    let clean = CleanRow::from_raw(row);
    if clean.len() < MIN_ITEM_CELLS {
        return Err(RowRejection::TooNarrow);
    }
    if !is_item_number(clean.get(0)) {
        return Err(RowRejection::NotAnItemNumber);
    }

    Ok(clean)
}

/// Locate the header and keep the item rows that follow it.
///
/// A grid without a header row yields no rows.
pub fn classify_table(grid: &TableGrid) -> ClassifiedTable {
    let Some(header_index) = find_header_row(grid) else {
        return ClassifiedTable::default();
    };

    let mut table = ClassifiedTable {
        header_index: Some(header_index),
        ..Default::default()
    };

    for (offset, row) in grid.rows[header_index + 1..].iter().enumerate() {
        match classify_row(row) {
            Ok(clean) => table.item_rows.push(clean),
            Err(reason) => {
                trace!("Dropped row {}: {:?}", header_index + 1 + offset, reason);
                table.dropped += 1;
            }
        }
    }

    table
}
