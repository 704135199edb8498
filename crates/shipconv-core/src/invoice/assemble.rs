//! Final table assembly: item rows followed by the summary footer.

use crate::models::table::{
    COL_AMOUNT, COL_DESCRIPTION, COL_ITEM, COL_MASK_NAME, COL_UNIT, COL_UNIT_PRICE,
};
use crate::models::{ConvertedTable, DocumentSummary, LineItem, OutputRow, OUTPUT_HEADERS};

/// Number of rows appended after the items.
pub const FOOTER_ROWS: usize = 4;

/// Build the four footer rows: two blank spacers, the invoice/PO/amount
/// row and the net weight row.
pub fn footer_rows(summary: &DocumentSummary) -> [OutputRow; FOOTER_ROWS] {
    let mut totals = OutputRow::blank();
    totals.set(COL_ITEM, "INVOICE NO.");
    totals.set(COL_DESCRIPTION, summary.invoice_range.as_str());
    totals.set(COL_MASK_NAME, format!("PO NO. {}", summary.po_list));
    totals.set(COL_UNIT_PRICE, "TOTAL AMOUNT");
    totals.set(COL_AMOUNT, summary.total_amount_text());

    let mut weight = OutputRow::blank();
    weight.set(COL_UNIT, "NET WEIGHT");
    weight.set(COL_UNIT_PRICE, summary.net_weight_text());

    [OutputRow::blank(), OutputRow::blank(), totals, weight]
}

/// Lay out all items in encounter order, then the footer.
pub fn assemble_table(items: &[LineItem], summary: &DocumentSummary) -> ConvertedTable {
    let mut rows: Vec<OutputRow> = Vec::with_capacity(items.len() + FOOTER_ROWS);
    rows.extend(items.iter().map(OutputRow::from_item));
    rows.extend(footer_rows(summary));

    ConvertedTable {
        headers: OUTPUT_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
        item_rows: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_footer_layout() {
        let summary = DocumentSummary {
            invoice_range: "INV-001-INV-002".to_string(),
            po_list: "PO-1, PO-2".to_string(),
            total_amount: 300.75,
            total_net_weight: 4.5,
            ..Default::default()
        };

        let [first, second, totals, weight] = footer_rows(&summary);
        assert!(first.is_blank());
        assert!(second.is_blank());
        assert_eq!(
            totals.cells(),
            &[
                "",
                "INVOICE NO.",
                "INV-001-INV-002",
                "PO NO. PO-1, PO-2",
                "",
                "",
                "",
                "TOTAL AMOUNT",
                "300",
                "",
            ]
        );
        assert_eq!(
            weight.cells(),
            &["", "", "", "", "", "", "NET WEIGHT", "4.5", "", ""]
        );
    }

    #[test]
    fn test_empty_document_has_footer_only() {
        let table = assemble_table(&[], &DocumentSummary::default());

        assert_eq!(table.len(), FOOTER_ROWS);
        assert!(table.item_rows().is_empty());
        assert_eq!(table.footer_rows()[2].get(COL_MASK_NAME), Some("PO NO. "));
        assert_eq!(table.footer_rows()[2].get(COL_AMOUNT), Some("0"));
        assert_eq!(table.footer_rows()[3].get(COL_UNIT_PRICE), Some("0.0"));
        assert_eq!(table.headers[0], "");
        assert_eq!(table.headers[4], "");
        assert_eq!(table.headers[5], "Q'TY");
    }

    #[test]
    fn test_items_precede_footer_in_order() {
        let items: Vec<LineItem> = ["1", "2", "3"]
            .iter()
            .map(|n| LineItem {
                item_number: n.to_string(),
                ..Default::default()
            })
            .collect();

        let table = assemble_table(&items, &DocumentSummary::default());
        assert_eq!(table.len(), 7);
        let numbers: Vec<_> = table
            .item_rows()
            .iter()
            .map(|row| row.get(COL_ITEM).unwrap())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }
}
