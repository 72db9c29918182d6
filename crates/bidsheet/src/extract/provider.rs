//! Extractor trait, configuration, and the tolerant wire shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BidsheetError, Result};
use crate::item::{DEFAULT_UOM, ItemRecord};

/// Configuration for extraction providers.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Model to use (provider-specific).
    pub model: String,

    /// Maximum tokens in the response.
    pub max_tokens: usize,

    /// Temperature for generation. Extraction wants determinism.
    pub temperature: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.3-70b-versatile".to_string(),
            max_tokens: 1500,
            temperature: 0.0,
        }
    }
}

/// Trait for item-extraction providers.
///
/// Implementations must be thread-safe (Send + Sync) so one provider
/// can serve a whole comparison run.
pub trait ItemExtractor: Send + Sync {
    /// Extract raw line items from one document's text.
    ///
    /// Returns the boundary wire shape, not [`ItemRecord`]; the caller
    /// decides what to do with records that fail coercion.
    fn extract_items(&self, document_text: &str) -> Result<Vec<RawItem>>;

    /// Provider configuration.
    fn config(&self) -> &ExtractorConfig;
}

impl ItemExtractor for Box<dyn ItemExtractor> {
    fn extract_items(&self, document_text: &str) -> Result<Vec<RawItem>> {
        (**self).extract_items(document_text)
    }

    fn config(&self) -> &ExtractorConfig {
        (**self).config()
    }
}

/// One extracted item as the service reported it, before coercion into
/// [`ItemRecord`].
///
/// Every field is optional at this stage: the service may omit keys,
/// send numbers as strings, or send garbage. Field-level problems
/// degrade to `None` here and are resolved by [`RawItem::into_record`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    /// Item description, if the service produced a usable one.
    pub description: Option<String>,
    /// Quantity after lenient coercion.
    pub quantity: Option<f64>,
    /// Unit of measure, if stated.
    pub uom: Option<String>,
    /// Unit price after lenient coercion.
    pub unit_price: Option<f64>,
}

impl RawItem {
    /// Build a raw item from one JSON object of the service response.
    fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            description: map
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            quantity: map.get("quantity").and_then(coerce_number),
            uom: map
                .get("uom")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            unit_price: map.get("unit_price").and_then(coerce_number),
        }
    }

    /// Coerce into the internal record shape.
    ///
    /// Returns `None` when the description is missing or whitespace-only
    /// after trimming; such records are dropped before matching. The
    /// stored description stays verbatim.
    pub fn into_record(self) -> Option<ItemRecord> {
        let description = self.description?;
        if description.trim().is_empty() {
            return None;
        }
        Some(ItemRecord {
            description,
            quantity: self.quantity,
            unit_of_measure: self.uom.unwrap_or_else(|| DEFAULT_UOM.to_string()),
            unit_price: self.unit_price,
        })
    }
}

/// Parse a service response into raw items, enforcing the output
/// contract.
///
/// Markdown code fences are stripped first (models wrap JSON in them).
/// A response that does not parse as a JSON array, or an array holding
/// non-object entries, is a [`BidsheetError::Contract`] and rejects the
/// whole document. Field-level coercion never errors.
pub fn parse_items_response(response: &str) -> Result<Vec<RawItem>> {
    let json_str = strip_code_fences(response);

    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| BidsheetError::Contract(format!("response is not valid JSON: {e}")))?;

    let Value::Array(entries) = value else {
        return Err(BidsheetError::Contract(
            "response is not a JSON array of item records".to_string(),
        ));
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Value::Object(map) => Ok(RawItem::from_object(map)),
            other => Err(BidsheetError::Contract(format!(
                "entry {i} is not an item record (found {})",
                json_type_name(other)
            ))),
        })
        .collect()
}

/// Extract the JSON payload from a markdown code block if present.
fn strip_code_fences(response: &str) -> &str {
    if response.contains("```json") {
        response
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(str::trim)
            .unwrap_or(response)
    } else if response.contains("```") {
        response
            .split("```")
            .nth(1)
            .map(str::trim)
            .unwrap_or(response)
    } else {
        response.trim()
    }
}

/// Lenient numeric coercion: numbers pass through, numeric-looking
/// strings are parsed, everything else (including negatives and
/// non-finite values) becomes absent.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
