//! Conversion of shipping invoice pages into a line-item table.
//!
//! The pipeline per page is: [`fields`] recovers document-level fields from
//! the text, [`classifier`] finds item rows in each table grid, a
//! [`RowMapper`] turns rows into [`LineItem`](crate::models::LineItem)s and
//! [`Aggregator`] keeps the running totals. [`assemble`] lays out the
//! final table once every page is consumed.

pub mod aggregate;
pub mod assemble;
pub mod classifier;
mod converter;
pub mod fields;
pub mod normalize;
pub mod rules;

pub use aggregate::Aggregator;
pub use classifier::{ClassifiedTable, CleanRow, RowRejection};
pub use converter::{ConversionResult, ConversionStats, DocumentConverter};
pub use normalize::{RowMapper, TrailingColumnMapper};

use crate::error::ConvertError;
use crate::models::Document;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Trait for document converters.
pub trait InvoiceConverter {
    /// Convert a whole document into the output table.
    fn convert(&self, document: &Document) -> Result<ConversionResult>;
}
