//! Page data handed over by the document layer.
//!
//! The document layer (PDF rendering, table geometry detection) runs outside
//! this crate. It emits one [`PageInput`] per page as JSON:
//!
//! ```json
//! { "pages": [ { "text": "INVOICE #: A-1", "tables": [ [ ["ITEM", null, "Q'TY"] ] ] } ] }
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A full document, pages in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub pages: Vec<PageInput>,
}

/// Text and table grids extracted from a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// Raw page text, absent when the document layer found none.
    #[serde(default, rename = "text")]
    pub raw_text: Option<String>,

    /// Table grids in the order the document layer detected them.
    #[serde(default, rename = "tables")]
    pub table_grids: Vec<TableGrid>,
}

/// A table as an ordered grid of optional text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableGrid {
    pub rows: Vec<Vec<Option<String>>>,
}

impl Document {
    pub fn new(pages: Vec<PageInput>) -> Self {
        Self { pages }
    }

    /// Decode a document from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a document from a JSON stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl PageInput {
    pub fn new(raw_text: Option<&str>, table_grids: Vec<TableGrid>) -> Self {
        Self {
            raw_text: raw_text.map(str::to_string),
            table_grids,
        }
    }

    /// Page text, or `None` when the page carries no usable text.
    ///
    /// Whitespace-only text still counts as text.
    pub fn text(&self) -> Option<&str> {
        self.raw_text.as_deref().filter(|text| !text.is_empty())
    }
}

impl TableGrid {
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Build a grid from string cells, treating empty strings as absent.
    pub fn from_cells<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
