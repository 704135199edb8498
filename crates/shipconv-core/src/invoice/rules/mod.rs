//! Rule-based field extractors for shipping invoice pages.

pub mod numbers;
pub mod patterns;
pub mod references;
pub mod weight;

pub use numbers::{clean_numeric, format_float, format_truncated, parse_decimal};
pub use references::{InvoiceNumberExtractor, PoNumberExtractor};
pub use weight::NetWeightExtractor;

use super::Result;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from page text.
    ///
    /// `Ok(None)` means the field is not on the page. An error means the
    /// field was found but its value is unusable.
    fn extract(&self, text: &str) -> Result<Option<Self::Output>>;
}
