//! Prompt templates for item extraction.

/// System prompt shared by the hosted providers.
pub fn system_prompt() -> &'static str {
    "You extract structured line items from procurement documents \
     (RFQs and vendor quotations). You respond with machine-readable \
     JSON only, never with prose or markdown."
}

/// Build the extraction prompt for one document's text.
pub fn extraction_prompt(text: &str) -> String {
    format!(
        r#"Extract structured item data from this quotation / RFQ document.
Return ONLY a valid JSON array of objects. No explanation, no markdown, no extra text.

Each object must have exactly these keys:
- "description": str   (clean item name / description)
- "quantity": float    (use the number shown - e.g. 4, 65, 200)
- "uom": str           ("EA", "SET", etc. - use "EA" if unclear)
- "unit_price": float or null   (the price per unit if shown, else null)

Focus on the table containing items, descriptions, quantities, and prices.

Document text:
{text}
"#
    )
}
