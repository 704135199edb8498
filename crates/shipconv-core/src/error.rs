//! Error types for the shipconv-core library.

use thiserror::Error;

/// Main error type for the shipconv library.
#[derive(Error, Debug)]
pub enum ShipconvError {
    /// Conversion of the page data failed.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// The page document could not be decoded.
    #[error("input error: {0}")]
    Input(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning pages into line items and totals.
///
/// Pages without text, tables without a header row and rows that fail
/// classification are normal branches and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A value matched a numeric field but is not a valid number.
    #[error("failed to parse {field}: {value:?}")]
    Parse { field: String, value: String },

    /// The converter was built with unusable settings.
    #[error("invalid conversion settings: {0}")]
    InvalidConfig(String),
}

impl ConvertError {
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type for the shipconv library.
pub type Result<T> = std::result::Result<T, ShipconvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ConvertError::parse("amount", "1.2.3");
        assert_eq!(err.to_string(), "failed to parse amount: \"1.2.3\"");

        let wrapped = ShipconvError::from(err);
        assert_eq!(
            wrapped.to_string(),
            "conversion error: failed to parse amount: \"1.2.3\""
        );
    }
}
