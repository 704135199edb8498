//! Net weight extraction.

use super::numbers::parse_decimal;
use super::patterns::NET_WEIGHT;
use super::FieldExtractor;
use crate::invoice::Result;

/// Net weight extractor ("NET WEIGHT: 12.5 KGS"), in kilograms.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetWeightExtractor;

impl FieldExtractor for NetWeightExtractor {
    type Output = f64;

    fn extract(&self, text: &str) -> Result<Option<f64>> {
        let Some(caps) = NET_WEIGHT.captures(text) else {
            return Ok(None);
        };
        parse_decimal("net weight", caps[1].trim()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_extract_net_weight() {
        assert_eq!(
            NetWeightExtractor.extract("NET WEIGHT: 3.25 KGS").unwrap(),
            Some(3.25)
        );
        assert_eq!(
            NetWeightExtractor.extract("NET WEIGHT:10KGS\nNET WEIGHT: 5 KGS").unwrap(),
            Some(10.0)
        );
        assert_eq!(NetWeightExtractor.extract("GROSS WEIGHT: 3 KGS").unwrap(), None);
    }

    #[test]
    fn test_malformed_net_weight_is_error() {
        let err = NetWeightExtractor.extract("NET WEIGHT: 1.2.3 KGS").unwrap_err();
        assert_eq!(err, ConvertError::parse("net weight", "1.2.3"));
    }
}
