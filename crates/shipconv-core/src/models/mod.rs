//! Data models shared by the converter and its callers.

pub mod config;
pub mod document;
pub mod table;

pub use config::{ConversionConfig, OutputConfig, ShipconvConfig};
pub use document::{Document, PageInput, TableGrid};
pub use table::{
    ConvertedTable, DocumentSummary, ExtractedFields, LineItem, OutputRow, OUTPUT_COLUMNS,
    OUTPUT_HEADERS,
};
