//! Cross-page accumulation of identifiers and totals.

use std::collections::BTreeSet;

use crate::models::{DocumentSummary, ExtractedFields};

/// Running state for one document conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregator {
    invoice_numbers: BTreeSet<String>,
    po_numbers: BTreeSet<String>,
    total_amount: f64,
    total_net_weight: f64,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one page's fields. Net weights add up across pages.
    pub fn add_fields(&mut self, fields: &ExtractedFields) {
        if let Some(invoice) = &fields.invoice_number {
            self.invoice_numbers.insert(invoice.clone());
        }
        if let Some(po) = &fields.po_number {
            self.po_numbers.insert(po.clone());
        }
        if let Some(weight) = fields.net_weight_kg {
            self.total_net_weight += weight;
        }
    }

    pub fn add_amount(&mut self, amount: f64) {
        self.total_amount += amount;
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn total_net_weight(&self) -> f64 {
        self.total_net_weight
    }

    /// Render the aggregates for the footer.
    pub fn finish(self) -> DocumentSummary {
        let invoice_numbers: Vec<String> = self.invoice_numbers.into_iter().collect();
        let po_numbers: Vec<String> = self.po_numbers.into_iter().collect();

        let invoice_range = match invoice_numbers.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, .., last] => format!("{first}-{last}"),
        };
        let po_list = po_numbers.join(", ");

        DocumentSummary {
            invoice_numbers,
            po_numbers,
            invoice_range,
            po_list,
            total_amount: self.total_amount,
            total_net_weight: self.total_net_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(invoice: Option<&str>, po: Option<&str>, weight: Option<f64>) -> ExtractedFields {
        ExtractedFields {
            invoice_number: invoice.map(str::to_string),
            po_number: po.map(str::to_string),
            net_weight_kg: weight,
            is_no_commercial_value: false,
        }
    }

    #[test]
    fn test_empty_aggregator() {
        let summary = Aggregator::new().finish();
        assert_eq!(summary.invoice_range, "");
        assert_eq!(summary.po_list, "");
        assert_eq!(summary.total_amount_text(), "0");
        assert_eq!(summary.net_weight_text(), "0.0");
    }

    #[test]
    fn test_single_invoice_number() {
        let mut agg = Aggregator::new();
        agg.add_fields(&fields(Some("INV-001"), None, None));
        agg.add_fields(&fields(Some("INV-001"), None, None));
        assert_eq!(agg.finish().invoice_range, "INV-001");
    }

    #[test]
    fn test_invoice_range_uses_sorted_extremes() {
        let mut agg = Aggregator::new();
        agg.add_fields(&fields(Some("INV-003"), None, None));
        agg.add_fields(&fields(Some("INV-001"), None, None));
        agg.add_fields(&fields(Some("INV-002"), None, None));

        let summary = agg.finish();
        assert_eq!(summary.invoice_range, "INV-001-INV-003");
        assert_eq!(summary.invoice_numbers, vec!["INV-001", "INV-002", "INV-003"]);
    }

    #[test]
    fn test_range_is_lexicographic() {
        let mut agg = Aggregator::new();
        agg.add_fields(&fields(Some("9"), None, None));
        agg.add_fields(&fields(Some("10"), None, None));
        assert_eq!(agg.finish().invoice_range, "10-9");
    }

    #[test]
    fn test_po_numbers_sorted_and_joined() {
        let mut agg = Aggregator::new();
        agg.add_fields(&fields(None, Some("PO-B"), None));
        agg.add_fields(&fields(None, Some("PO-A"), None));
        agg.add_fields(&fields(None, Some("PO-B"), None));
        assert_eq!(agg.finish().po_list, "PO-A, PO-B");
    }

    #[test]
    fn test_totals_accumulate() {
        let mut agg = Aggregator::new();
        agg.add_fields(&fields(None, None, Some(1.5)));
        agg.add_fields(&fields(None, None, Some(2.25)));
        agg.add_amount(100.50);
        agg.add_amount(200.25);

        assert_eq!(agg.total_net_weight(), 3.75);
        let summary = agg.finish();
        assert_eq!(summary.total_amount_text(), "300");
        assert_eq!(summary.net_weight_text(), "3.75");
    }
}
