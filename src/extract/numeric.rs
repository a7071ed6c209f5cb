//! Locale-aware quantity parsing.

use crate::error::ScraperError;

/// Parses a displayed quantity like `"12,5 kcal"` or `"340 gr"` into a float.
///
/// The source locale writes decimals with a comma, so the comma is
/// normalized to a period first; then the leading whitespace-separated
/// token is parsed and any trailing unit token is ignored.
pub fn parse_quantity(raw: &str) -> Result<f64, ScraperError> {
    let normalized = raw.replace(',', ".");
    let token = normalized
        .split_whitespace()
        .next()
        .ok_or_else(|| ScraperError::Parse {
            key: String::new(),
            value: raw.to_string(),
        })?;

    token.parse::<f64>().map_err(|_| ScraperError::Parse {
        key: String::new(),
        value: raw.to_string(),
    })
}
