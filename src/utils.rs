use crate::models::PriceRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::path::Path;

pub fn save_records_to_csv(
    records: &[PriceRecord],
    output_path: &str,
    queried_at: NaiveDate,
) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create output file: {}", output_path))?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Producto", "Precio", "Tienda", "Fecha"])?;

    for record in records {
        writer.write_record(&[
            record.name.clone(),
            format!("{:.2}", record.price),
            record.source.clone().unwrap_or_default(),
            queried_at.format("%Y-%m-%d").to_string(),
        ])?;
    }

    writer.flush()?;
    println!("Saved {} records to {}", records.len(), output_path);

    Ok(())
}

pub fn load_records_from_csv(input_path: &str) -> Result<Vec<PriceRecord>> {
    let path = Path::new(input_path);

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .context(format!("Failed to open input file: {}", input_path))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;

        if row.len() < 2 {
            println!("Warning: Skipping row with insufficient fields: {:?}", row);
            continue;
        }

        let price = match row.get(1).unwrap_or_default().parse::<f64>() {
            Ok(price) => price,
            Err(_) => {
                println!("Warning: Skipping row with unparseable price: {:?}", row);
                continue;
            }
        };

        let source = row
            .get(2)
            .map(|s| {
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            })
            .unwrap_or(None);

        records.push(PriceRecord {
            name: row.get(0).unwrap_or_default().to_string(),
            price,
            source,
        });
    }

    println!("Loaded {} records from {}", records.len(), input_path);
    Ok(records)
}

/// Records from `new_records` that are not already present in the history.
/// Two rows are the same entry when name, price and source all match;
/// the same product at a different price or store stays.
pub fn compare_records(
    old_records: &[PriceRecord],
    new_records: &[PriceRecord],
) -> Vec<PriceRecord> {
    let mut unique_records = Vec::new();

    for new_record in new_records {
        let is_unique = old_records.iter().all(|old_record| {
            new_record.name != old_record.name
                || new_record.price != old_record.price
                || new_record.source != old_record.source
        });

        if is_unique {
            unique_records.push(new_record.clone());
        }
    }

    unique_records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, source: Option<&str>) -> PriceRecord {
        PriceRecord {
            name: name.to_string(),
            price,
            source: source.map(String::from),
        }
    }

    #[test]
    fn compare_records_drops_exact_duplicates() {
        let old = vec![record("Arroz", 8.50, Some("Tienda X"))];
        let new = vec![
            record("Arroz", 8.50, Some("Tienda X")),
            record("Arroz", 9.00, Some("Tienda X")),
            record("Arroz", 8.50, Some("Tienda Y")),
        ];
        let unique = compare_records(&old, &new);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].price, 9.00);
        assert_eq!(unique[1].source.as_deref(), Some("Tienda Y"));
    }

    #[test]
    fn csv_round_trip_preserves_records() {
        let path = std::env::temp_dir().join(format!("precios-test-{}.csv", std::process::id()));
        let path = path.to_str().unwrap().to_string();

        let records = vec![
            record("Huevos", 30.0, Some("Tienda X")),
            record("Arroz", 8.50, None),
        ];
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        save_records_to_csv(&records, &path, date).unwrap();
        let loaded = load_records_from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Huevos");
        assert_eq!(loaded[0].price, 30.0);
        assert_eq!(loaded[0].source.as_deref(), Some("Tienda X"));
        assert_eq!(loaded[1].source, None);
    }

    #[test]
    fn missing_history_file_is_empty() {
        let loaded = load_records_from_csv("definitely-not-here.csv").unwrap();
        assert!(loaded.is_empty());
    }
}
