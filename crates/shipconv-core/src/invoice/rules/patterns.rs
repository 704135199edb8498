//! Common regex patterns for shipping invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Page marking for shipments without declared trade value.
pub const NO_COMMERCIAL_VALUE: &str = "NO COMMERCIAL VALUE";

/// Header tokens that must both appear in a table's header row.
pub const HEADER_ITEM_TOKEN: &str = "ITEM";
pub const HEADER_QUANTITY_TOKEN: &str = "Q'TY";

/// Substring marking a totals row inside an item table (matched case-insensitively).
pub const TOTAL_ROW_TOKEN: &str = "TOTAL";

lazy_static! {
    // Invoice number: "INVOICE: X", "INVOICE #: X", "INVOICE # : X"
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"INVOICE\s*#?\s*:\s*([A-Z0-9\-]+)"
    ).unwrap();

    // PO number: "PO NO: X", "PO NO.: X", "PO NO. #: X"
    pub static ref PO_NUMBER: Regex = Regex::new(
        r"PO NO\.?\s*#?\s*:\s*([A-Z0-9\-]+)"
    ).unwrap();

    // Net weight in kilograms: "NET WEIGHT: 12.5 KGS"
    pub static ref NET_WEIGHT: Regex = Regex::new(
        r"NET WEIGHT:\s*([0-9.]+)\s*KGS"
    ).unwrap();

    // Everything that is not part of a plain decimal number
    pub static ref NON_NUMERIC: Regex = Regex::new(
        r"[^0-9.]"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_variants() {
        for text in ["INVOICE: A-1", "INVOICE #: A-1", "INVOICE # : A-1", "INVOICE#:A-1"] {
            assert_eq!(&INVOICE_NUMBER.captures(text).unwrap()[1], "A-1", "{text}");
        }
        assert!(INVOICE_NUMBER.captures("INVOICE DATE 2024").is_none());
    }

    #[test]
    fn test_invoice_number_stops_at_lowercase() {
        assert_eq!(&INVOICE_NUMBER.captures("INVOICE: AB12cd").unwrap()[1], "AB12");
    }

    #[test]
    fn test_po_number_variants() {
        for text in ["PO NO: 4500", "PO NO.: 4500", "PO NO. #: 4500", "PO NO #:4500"] {
            assert_eq!(&PO_NUMBER.captures(text).unwrap()[1], "4500", "{text}");
        }
    }

    #[test]
    fn test_net_weight() {
        let caps = NET_WEIGHT.captures("NET WEIGHT: 12.50 KGS").unwrap();
        assert_eq!(&caps[1], "12.50");
        assert!(NET_WEIGHT.captures("NET WEIGHT: 12.50 LBS").is_none());
    }
}
