//! Document-level field recovery from a page's raw text.

use super::rules::patterns::NO_COMMERCIAL_VALUE;
use super::rules::{FieldExtractor, InvoiceNumberExtractor, NetWeightExtractor, PoNumberExtractor};
use super::Result;
use crate::models::ExtractedFields;

/// Recover invoice number, PO number, net weight and the no-commercial-value
/// marking from one page.
///
/// Fields without a match are left empty. Only a net weight that matches but
/// does not parse is an error.
pub fn extract_fields(text: &str) -> Result<ExtractedFields> {
    Ok(ExtractedFields {
        invoice_number: InvoiceNumberExtractor.extract(text)?,
        po_number: PoNumberExtractor.extract(text)?,
        net_weight_kg: NetWeightExtractor.extract(text)?,
        is_no_commercial_value: text.contains(NO_COMMERCIAL_VALUE),
    })
}

impl ExtractedFields {
    /// Term carried by every item row of the page these fields came from.
    pub fn term(&self) -> &'static str {
        if self.is_no_commercial_value {
            NO_COMMERCIAL_VALUE
        } else {
            ""
        }
    }
}
