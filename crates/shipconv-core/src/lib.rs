//! Core library for shipping invoice conversion.
//!
//! This crate provides:
//! - The page input model produced by an external document layer
//! - Pattern-based recovery of invoice number, PO number, net weight and
//!   the no-commercial-value marking
//! - Item-row classification and normalization for page table grids
//! - Cross-page aggregation and the fixed ten-column output table

pub mod error;
pub mod invoice;
pub mod models;

pub use error::{ConvertError, Result, ShipconvError};
pub use invoice::{ConversionResult, ConversionStats, DocumentConverter, InvoiceConverter};
pub use models::{
    ConvertedTable, Document, DocumentSummary, LineItem, OutputRow, PageInput, ShipconvConfig,
    TableGrid,
};

/// Convert a document with the default settings.
pub fn convert_document(document: &Document) -> Result<ConversionResult> {
    Ok(DocumentConverter::new().convert(document)?)
}
