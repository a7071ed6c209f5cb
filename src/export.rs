//! CSV output with a fixed column contract.

use std::path::Path;

use tracing::{info, warn};

use crate::error::ScraperError;
use crate::extract::{NutritionRecord, PROPERTY_COLUMNS};

const NAME_HEADER: &str = "Nombre";

/// Writes the records to `path`, truncating any previous run's output.
///
/// Column positions are fixed: name first, then [`PROPERTY_COLUMNS`] in
/// order. A record with no properties writes a name-only row; a non-empty
/// record missing a key gets a blank cell for it (never a zero) plus a
/// warning. Output depends only on the input records, so identical input
/// produces byte-identical files.
pub fn export_csv(records: &[NutritionRecord], path: &Path) -> Result<(), ScraperError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![NAME_HEADER.to_string()];
    header.extend(PROPERTY_COLUMNS.iter().map(|key| key.csv_header().to_string()));
    writer.write_record(&header)?;

    for record in records {
        writer.write_record(&row_for(record))?;
    }

    writer.flush()?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn row_for(record: &NutritionRecord) -> Vec<String> {
    let mut row = Vec::with_capacity(1 + PROPERTY_COLUMNS.len());
    row.push(record.name.clone());

    if record.properties.is_empty() {
        row.extend(std::iter::repeat(String::new()).take(PROPERTY_COLUMNS.len()));
        return row;
    }

    for key in PROPERTY_COLUMNS {
        match record.properties.get(&key) {
            Some(quantity) => row.push(quantity.to_string()),
            None => {
                warn!(
                    "Record {:?} is missing {:?}, writing a blank cell",
                    record.name, key
                );
                row.push(String::new());
            }
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::extract::PropertyKey;

    fn full_record(name: &str) -> NutritionRecord {
        let mut properties = BTreeMap::new();
        for (i, key) in PROPERTY_COLUMNS.iter().enumerate() {
            properties.insert(*key, (i + 1) as f64);
        }
        NutritionRecord {
            name: name.to_string(),
            properties,
        }
    }

    fn empty_record(name: &str) -> NutritionRecord {
        NutritionRecord {
            name: name.to_string(),
            properties: BTreeMap::new(),
        }
    }

    #[test]
    fn test_header_and_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        export_csv(&[full_record("Plato")], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Nombre,Energía (kcal),Carbohidratos (gr),Grasas totales (gr),\
             Azúcares (gr),Grasas saturadas (gr),Fibra dietética (gr),\
             Proteínas (gr),Sal (gr),Racion (gr),Energía Total (kcal)"
        );
        assert_eq!(lines.next().unwrap(), "Plato,1,2,3,4,5,6,7,8,9,10");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_record_writes_name_only_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        export_csv(&[empty_record("Sin datos")], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().nth(1).unwrap(), "Sin datos,,,,,,,,,,");
    }

    #[test]
    fn test_partial_record_leaves_blank_cell() {
        let mut record = full_record("Parcial");
        record.properties.remove(&PropertyKey::TotalEnergy);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        export_csv(&[record], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().nth(1).unwrap(), "Parcial,1,2,3,4,5,6,7,8,9,");
    }

    #[test]
    fn test_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        export_csv(&[full_record("Uno"), full_record("Dos")], &path).unwrap();
        export_csv(&[full_record("Solo")], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("Solo"));
        assert!(!content.contains("Uno"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let records = vec![full_record("A"), empty_record("B")];
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");

        export_csv(&records, &first).unwrap();
        export_csv(&records, &second).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn test_fractional_values_keep_decimal_point() {
        let mut record = empty_record("Decimal");
        record.properties.insert(PropertyKey::Energy, 12.5);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        export_csv(&[record], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().nth(1).unwrap().starts_with("Decimal,12.5,"));
    }
}
