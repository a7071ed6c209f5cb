//! Data types shared by the extraction pipeline and the CSV exporter.

use std::collections::BTreeMap;

use serde::Serialize;

/// Canonical nutrition properties. The set is closed: labels outside of it
/// are dropped during extraction.
///
/// Variant order doubles as the CSV column order after the name column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PropertyKey {
    Energy,
    Carbohydrates,
    TotalFats,
    Sugars,
    SaturatedFats,
    DietaryFiber,
    Proteins,
    Salt,
    PortionSize,
    TotalEnergy,
}

/// Export column order, fixed by contract.
pub const PROPERTY_COLUMNS: [PropertyKey; 10] = [
    PropertyKey::Energy,
    PropertyKey::Carbohydrates,
    PropertyKey::TotalFats,
    PropertyKey::Sugars,
    PropertyKey::SaturatedFats,
    PropertyKey::DietaryFiber,
    PropertyKey::Proteins,
    PropertyKey::Salt,
    PropertyKey::PortionSize,
    PropertyKey::TotalEnergy,
];

impl PropertyKey {
    /// Maps a nutrition-table label (source locale) to its canonical key.
    /// Portion size and total energy never appear as table labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Energía" => Some(Self::Energy),
            "Carbohidratos" => Some(Self::Carbohydrates),
            "Grasas totales" => Some(Self::TotalFats),
            "Azúcares" => Some(Self::Sugars),
            "Grasas saturadas" => Some(Self::SaturatedFats),
            "Fibra dietética" => Some(Self::DietaryFiber),
            "Proteínas" => Some(Self::Proteins),
            "Sal" => Some(Self::Salt),
            _ => None,
        }
    }

    /// Column header as it appears in the output file.
    pub fn csv_header(&self) -> &'static str {
        match self {
            Self::Energy => "Energía (kcal)",
            Self::Carbohydrates => "Carbohidratos (gr)",
            Self::TotalFats => "Grasas totales (gr)",
            Self::Sugars => "Azúcares (gr)",
            Self::SaturatedFats => "Grasas saturadas (gr)",
            Self::DietaryFiber => "Fibra dietética (gr)",
            Self::Proteins => "Proteínas (gr)",
            Self::Salt => "Sal (gr)",
            Self::PortionSize => "Racion (gr)",
            Self::TotalEnergy => "Energía Total (kcal)",
        }
    }
}

/// One dish. Built once per successfully fetched detail page, immutable
/// afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionRecord {
    /// Dish name; empty when no heading matched.
    pub name: String,
    /// Extracted properties; empty when the page has no nutrition table.
    pub properties: BTreeMap<PropertyKey, f64>,
}

impl NutritionRecord {
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_map_to_keys() {
        assert_eq!(PropertyKey::from_label("Energía"), Some(PropertyKey::Energy));
        assert_eq!(PropertyKey::from_label("Sal"), Some(PropertyKey::Salt));
        assert_eq!(
            PropertyKey::from_label("Grasas saturadas"),
            Some(PropertyKey::SaturatedFats)
        );
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(PropertyKey::from_label("Colesterol"), None);
        assert_eq!(PropertyKey::from_label(""), None);
        // Matching is exact, no case folding.
        assert_eq!(PropertyKey::from_label("energía"), None);
    }

    #[test]
    fn test_column_order_matches_key_order() {
        // BTreeMap iteration must agree with the export column order.
        let mut sorted = PROPERTY_COLUMNS;
        sorted.sort();
        assert_eq!(sorted, PROPERTY_COLUMNS);
    }
}
