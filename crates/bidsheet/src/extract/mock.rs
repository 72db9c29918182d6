//! Mock extraction provider for tests and dry runs.

use crate::error::{BidsheetError, Result};

use super::provider::{ExtractorConfig, ItemExtractor, RawItem};

/// Deterministic extractor that needs no network.
///
/// Reads one item per non-empty document line in the pipe-delimited
/// form `description | quantity | uom | unit_price`; trailing fields
/// may be omitted. Useful for exercising the full pipeline against
/// plain-text fixtures, and as the CLI's `--provider mock`.
pub struct MockExtractor {
    config: ExtractorConfig,
    fail_contract: bool,
}

impl MockExtractor {
    /// Create a mock extractor.
    pub fn new() -> Self {
        Self {
            config: ExtractorConfig {
                model: "mock".to_string(),
                ..ExtractorConfig::default()
            },
            fail_contract: false,
        }
    }

    /// Create a mock that reports a contract violation for every
    /// document, for exercising fail-fast paths.
    pub fn failing() -> Self {
        Self {
            fail_contract: true,
            ..Self::new()
        }
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemExtractor for MockExtractor {
    fn extract_items(&self, document_text: &str) -> Result<Vec<RawItem>> {
        if self.fail_contract {
            return Err(BidsheetError::Contract(
                "mock extractor configured to fail".to_string(),
            ));
        }

        Ok(document_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_line)
            .collect())
    }

    fn config(&self) -> &ExtractorConfig {
        &self.config
    }
}

/// Parse one `description | quantity | uom | unit_price` line.
fn parse_line(line: &str) -> RawItem {
    let mut fields = line.split('|').map(str::trim);

    let description = fields
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let quantity = fields.next().and_then(|s| s.parse::<f64>().ok());
    let uom = fields
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let unit_price = fields.next().and_then(|s| s.parse::<f64>().ok());

    RawItem {
        description,
        quantity,
        uom,
        unit_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_lines() {
        let mock = MockExtractor::new();
        let items = mock
            .extract_items("Gasket Set | 4 | SET | 12.5\nHex Bolt M8 | 100 | EA | 0.35\n")
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description.as_deref(), Some("Gasket Set"));
        assert_eq!(items[0].quantity, Some(4.0));
        assert_eq!(items[1].unit_price, Some(0.35));
    }

    #[test]
    fn omitted_fields_are_absent() {
        let mock = MockExtractor::new();
        let items = mock.extract_items("Gasket Set\n").unwrap();
        assert_eq!(items[0].description.as_deref(), Some("Gasket Set"));
        assert_eq!(items[0].quantity, None);
        assert_eq!(items[0].uom, None);
        assert_eq!(items[0].unit_price, None);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mock = MockExtractor::new();
        let items = mock.extract_items("\n\nWidget | 1\n\n").unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn failing_mock_reports_contract_violation() {
        let mock = MockExtractor::failing();
        let err = mock.extract_items("Widget").unwrap_err();
        assert!(matches!(err, BidsheetError::Contract(_)));
    }
}
