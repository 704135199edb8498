//! Line items and the fixed ten-column output table.

use serde::{Deserialize, Serialize};

use crate::invoice::rules::numbers::{format_float, format_truncated};

/// Number of positional columns in every output row.
pub const OUTPUT_COLUMNS: usize = 10;

/// Header labels for the output table. The leading column and the spacer
/// before the quantity column are unlabeled.
pub const OUTPUT_HEADERS: [&str; OUTPUT_COLUMNS] = [
    "",
    "ITEM",
    "Item Code(Pre PR) / DESCRIPTION",
    "MASK NAME",
    "",
    "Q'TY",
    "U/M",
    "U/P (USD)",
    "AMOUNT (USD)",
    "Term",
];

pub(crate) const COL_ITEM: usize = 1;
pub(crate) const COL_DESCRIPTION: usize = 2;
pub(crate) const COL_MASK_NAME: usize = 3;
pub(crate) const COL_QUANTITY: usize = 5;
pub(crate) const COL_UNIT: usize = 6;
pub(crate) const COL_UNIT_PRICE: usize = 7;
pub(crate) const COL_AMOUNT: usize = 8;
pub(crate) const COL_TERM: usize = 9;

/// Document-level fields recovered from one page's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_weight_kg: Option<f64>,

    /// The page is marked "NO COMMERCIAL VALUE".
    pub is_no_commercial_value: bool,
}

/// One invoiced article, normalized from a table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_number: String,
    pub description: String,
    /// Always empty; kept for the output layout.
    pub mask_name: String,
    pub quantity: String,
    pub unit: String,
    /// Digits and periods only.
    pub unit_price: String,
    /// Digits and periods only.
    pub amount: String,
    pub term: String,
}

/// A positional output row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputRow(pub [String; OUTPUT_COLUMNS]);

impl OutputRow {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_item(item: &LineItem) -> Self {
        let mut row = Self::blank();
        row.set(COL_ITEM, &item.item_number);
        row.set(COL_DESCRIPTION, &item.description);
        row.set(COL_MASK_NAME, &item.mask_name);
        row.set(COL_QUANTITY, &item.quantity);
        row.set(COL_UNIT, &item.unit);
        row.set(COL_UNIT_PRICE, &item.unit_price);
        row.set(COL_AMOUNT, &item.amount);
        row.set(COL_TERM, &item.term);
        row
    }

    pub(crate) fn set(&mut self, column: usize, value: impl Into<String>) {
        self.0[column] = value.into();
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }
}

/// Aggregates for the whole document, ready for the footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Distinct invoice numbers, sorted.
    pub invoice_numbers: Vec<String>,
    /// Distinct PO numbers, sorted.
    pub po_numbers: Vec<String>,
    /// "first-last" of the sorted invoice numbers, the single number, or empty.
    pub invoice_range: String,
    /// PO numbers joined with ", ".
    pub po_list: String,
    pub total_amount: f64,
    pub total_net_weight: f64,
}

impl DocumentSummary {
    /// Total amount with the fractional part discarded.
    pub fn total_amount_text(&self) -> String {
        format_truncated(self.total_amount)
    }

    /// Net weight as a full decimal.
    pub fn net_weight_text(&self) -> String {
        format_float(self.total_net_weight)
    }
}

/// The assembled table: item rows followed by the four footer rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedTable {
    pub headers: Vec<String>,
    pub rows: Vec<OutputRow>,
    /// Number of leading rows that came from line items.
    pub item_rows: usize,
}

impl ConvertedTable {
    pub fn item_rows(&self) -> &[OutputRow] {
        &self.rows[..self.item_rows]
    }

    pub fn footer_rows(&self) -> &[OutputRow] {
        &self.rows[self.item_rows..]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_from_item_layout() {
        let item = LineItem {
            item_number: "1".to_string(),
            description: "PHOTOMASK ABC".to_string(),
            mask_name: String::new(),
            quantity: "2".to_string(),
            unit: "PCS".to_string(),
            unit_price: "10.00".to_string(),
            amount: "20.00".to_string(),
            term: "NO COMMERCIAL VALUE".to_string(),
        };

        let row = OutputRow::from_item(&item);
        assert_eq!(
            row.cells(),
            &[
                "",
                "1",
                "PHOTOMASK ABC",
                "",
                "",
                "2",
                "PCS",
                "10.00",
                "20.00",
                "NO COMMERCIAL VALUE",
            ]
        );
        assert!(!row.is_blank());
        assert!(OutputRow::blank().is_blank());
    }

    #[test]
    fn test_summary_number_rendering() {
        let summary = DocumentSummary {
            total_amount: 300.75,
            total_net_weight: 12.0,
            ..Default::default()
        };
        assert_eq!(summary.total_amount_text(), "300");
        assert_eq!(summary.net_weight_text(), "12.0");
    }

    #[test]
    fn test_row_serializes_as_array() {
        let json = serde_json::to_string(&OutputRow::blank()).unwrap();
        assert_eq!(json, r#"["","","","","","","","","",""]"#);
    }
}
