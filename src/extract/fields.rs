//! Nutrition-table cell extraction.
//!
//! The source markup renders each table row as adjacent label (`LC_name`)
//! and value (`LC_data`) cells with no cheap shared parent, so both cell
//! kinds are matched by one combined pattern and paired by document order:
//! a label binds to the nearest following value. Any deviation from strict
//! label/value interleaving is a structural failure for the whole page.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ScraperError;

/// Both cell kinds in one pattern, tagged by capture-group name.
static ROW_CELLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<label>LC_name"><[^>]*>[\wáéíóú\s]*)|(?P<value>LC_data"[^>]*>[\wáéíóú0-9,.?\s]*)"#,
    )
    .expect("row cell pattern is valid")
});

/// Closes the style attribute of a matched cell; the human-readable text
/// follows it.
const CELL_DELIMITER: &str = ";\">";

/// Extracts (label, value) pairs from a detail page body.
///
/// Returns an empty vector when the page has no nutrition table, and
/// `PairMismatch` when the cells do not interleave strictly. Values come
/// back decimal-normalized (comma to period), quote-stripped and trimmed.
pub fn extract_pairs(html: &str) -> Result<Vec<(String, String)>, ScraperError> {
    let mut pairs = Vec::new();
    let mut pending_label: Option<String> = None;

    for caps in ROW_CELLS.captures_iter(html) {
        if let Some(m) = caps.name("label") {
            let label = cell_text(m.as_str())?.trim().to_string();
            if let Some(unpaired) = pending_label.replace(label) {
                return Err(ScraperError::PairMismatch(format!(
                    "label {:?} is followed by another label, not a value",
                    unpaired
                )));
            }
        } else if let Some(m) = caps.name("value") {
            let value = cell_text(m.as_str())?
                .replace(',', ".")
                .replace('"', "")
                .trim()
                .to_string();
            match pending_label.take() {
                Some(label) => pairs.push((label, value)),
                None => {
                    return Err(ScraperError::PairMismatch(format!(
                        "value {:?} has no preceding label",
                        value
                    )))
                }
            }
        }
    }

    if let Some(unpaired) = pending_label {
        return Err(ScraperError::PairMismatch(format!(
            "trailing label {:?} has no value",
            unpaired
        )));
    }

    Ok(pairs)
}

/// Text of a matched cell: the part after the delimiter closing its style
/// attribute. A cell without the delimiter counts as structural breakage.
fn cell_text(matched: &str) -> Result<&str, ScraperError> {
    matched
        .split(CELL_DELIMITER)
        .nth(1)
        .ok_or_else(|| ScraperError::PairMismatch(format!("cell without text delimiter: {:?}", matched)))
}
