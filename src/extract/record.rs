//! Assembles one [`NutritionRecord`] from a detail page body.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::ScraperError;
use crate::extract::fields::extract_pairs;
use crate::extract::numeric::parse_quantity;
use crate::extract::types::{NutritionRecord, PropertyKey};

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<h1[^>]*>([^<]*)").expect("title pattern is valid"));

/// The portion size lives in a free-text sentence, not in the table.
static PORTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Tamaño\s(?:aproximado\s)?de la ración\s([a-z0-9,.\s]+)")
        .expect("portion pattern is valid")
});

/// Builds the record for one detail page. Never fails: recoverable
/// extraction problems degrade the record (empty properties, omitted keys)
/// and are logged with enough context to diagnose offline.
pub fn build_record(html: &str) -> NutritionRecord {
    let name = TITLE
        .captures(html)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    let pairs = match extract_pairs(html) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!("Malformed nutrition table for {:?}, keeping record empty: {}", name, e);
            return NutritionRecord {
                name,
                properties: BTreeMap::new(),
            };
        }
    };

    if pairs.is_empty() {
        debug!("No nutrition table on page for {:?}", name);
        return NutritionRecord {
            name,
            properties: BTreeMap::new(),
        };
    }

    let mut properties = BTreeMap::new();
    for (label, value) in pairs {
        let Some(key) = PropertyKey::from_label(&label) else {
            debug!("Skipping unrecognized label {:?} for {:?}", label, name);
            continue;
        };
        match parse_quantity(&value) {
            Ok(quantity) => {
                properties.insert(key, quantity);
            }
            Err(_) => {
                warn!(
                    "Omitting key {:?} for {:?}: value {:?} is not numeric",
                    label, name, value
                );
            }
        }
    }

    properties.insert(PropertyKey::PortionSize, portion_size(html, &name));

    if let Err(e) = derive_total_energy(&mut properties) {
        warn!("Skipping total energy for {:?}: {}", name, e);
    }

    NutritionRecord { name, properties }
}

/// Grams per serving, 0 when the sentence pattern does not match.
fn portion_size(html: &str, name: &str) -> f64 {
    match PORTION.captures(html) {
        Some(caps) => match parse_quantity(&caps[1]) {
            Ok(quantity) => quantity,
            Err(_) => {
                warn!(
                    "Portion size {:?} for {:?} is not numeric, using 0",
                    &caps[1], name
                );
                0.0
            }
        },
        None => 0.0,
    }
}

/// TotalEnergy = Energy / 100 * PortionSize. Energy is a hard dependency;
/// without it the key stays unset.
fn derive_total_energy(
    properties: &mut BTreeMap<PropertyKey, f64>,
) -> Result<(), ScraperError> {
    let energy = properties
        .get(&PropertyKey::Energy)
        .copied()
        .ok_or(ScraperError::MissingKey(PropertyKey::Energy))?;
    let portion = properties
        .get(&PropertyKey::PortionSize)
        .copied()
        .unwrap_or(0.0);

    properties.insert(PropertyKey::TotalEnergy, energy / 100.0 * portion);
    Ok(())
}
