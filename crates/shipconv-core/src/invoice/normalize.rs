//! Mapping of cleaned table rows onto the fixed line-item schema.

use super::classifier::CleanRow;
use super::rules::clean_numeric;
use crate::models::LineItem;

/// Rows wider than this split the description across two columns.
pub const SPLIT_DESCRIPTION_MIN_CELLS: usize = 7;

const DEFAULT_QUANTITY: &str = "1";
const DEFAULT_UNIT: &str = "PC";
const DEFAULT_UNIT_PRICE: &str = "0";
const DEFAULT_AMOUNT: &str = "0";

/// Maps a classified row to a [`LineItem`].
///
/// Implementations must be pure: the converter takes care of totals.
pub trait RowMapper {
    fn map_row(&self, row: &CleanRow, term: &str) -> LineItem;
}

/// Column mapping anchored at the end of the row.
///
/// Leading columns vary between documents, but quantity, unit, unit price
/// and amount are always the last four cells. On a row exactly five cells
/// wide the quantity therefore repeats the description cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingColumnMapper {
    description_prefix: String,
}

impl TrailingColumnMapper {
    pub fn new(description_prefix: impl Into<String>) -> Self {
        Self {
            description_prefix: description_prefix.into(),
        }
    }

    fn description(&self, row: &CleanRow) -> String {
        let description = if row.len() >= SPLIT_DESCRIPTION_MIN_CELLS {
            format!("{} {}", row.get(1), row.get(2))
        } else {
            row.get(1).to_string()
        };
        format!("{} {}", self.description_prefix, description.trim())
    }
}

impl Default for TrailingColumnMapper {
    fn default() -> Self {
        Self::new("PHOTOMASK")
    }
}

impl RowMapper for TrailingColumnMapper {
    fn map_row(&self, row: &CleanRow, term: &str) -> LineItem {
        let quantity = row.from_end(4).unwrap_or(DEFAULT_QUANTITY);
        let unit = row.from_end(3).unwrap_or(DEFAULT_UNIT);
        let unit_price = row.from_end(2).unwrap_or(DEFAULT_UNIT_PRICE);
        let amount = row.from_end(1).unwrap_or(DEFAULT_AMOUNT);

        LineItem {
            item_number: row.get(0).to_string(),
            description: self.description(row),
            mask_name: String::new(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            unit_price: clean_numeric(unit_price),
            amount: clean_numeric(amount),
            term: term.to_string(),
        }
    }
}
