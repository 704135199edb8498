//! Invoice and purchase order number extraction.

use regex::Regex;

use super::patterns::{INVOICE_NUMBER, PO_NUMBER};
use super::FieldExtractor;
use crate::invoice::Result;

/// Extract the token captured by the first match of a labeled pattern.
fn first_token(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Invoice number extractor ("INVOICE #: ...").
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceNumberExtractor;

impl FieldExtractor for InvoiceNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Result<Option<String>> {
        Ok(first_token(&INVOICE_NUMBER, text))
    }
}

/// Purchase order number extractor ("PO NO.: ...").
#[derive(Debug, Default, Clone, Copy)]
pub struct PoNumberExtractor;

impl FieldExtractor for PoNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Result<Option<String>> {
        Ok(first_token(&PO_NUMBER, text))
    }
}
