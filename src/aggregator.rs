use crate::error::ExtractionError;
use crate::extractor::{self, ContentMode};
use crate::models::{ExtractionResult, PriceRecord};
use std::cmp::Ordering;

/// Ordering applied to the final record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep extraction order. Used when a single specific product was
    /// queried, where reordering is not meaningful.
    None,
    /// Highest price first. Used for general listings.
    PriceDescending,
}

#[derive(Debug, Clone)]
pub struct AggregateOptions {
    pub mode: ContentMode,
    pub sort: SortOrder,
    /// Product the user asked about. Only used to word the no-results
    /// message, never to change parsing.
    pub product: Option<String>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            mode: ContentMode::Auto,
            sort: SortOrder::PriceDescending,
            product: None,
        }
    }
}

impl AggregateOptions {
    /// Message the presentation layer shows when no record survived.
    pub fn no_results_message(&self) -> String {
        match &self.product {
            Some(product) => format!("No se encontraron precios para {}.", product),
            None => "No se encontraron precios para el producto solicitado.".to_string(),
        }
    }
}

/// Run extraction and normalization over a raw content blob and build the
/// final result. Candidates that do not normalize to a valid price are
/// dropped; summary bounds are computed over the surviving set.
pub fn aggregate(
    content: &str,
    options: &AggregateOptions,
) -> Result<ExtractionResult, ExtractionError> {
    let candidates = extractor::extract(content, options.mode)?;

    let mut records: Vec<PriceRecord> = candidates
        .into_iter()
        .filter_map(PriceRecord::from_raw)
        .collect();

    let min_price = fold_prices(&records, f64::min);
    let max_price = fold_prices(&records, f64::max);

    if options.sort == SortOrder::PriceDescending {
        records.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
    }

    Ok(ExtractionResult {
        records,
        min_price,
        max_price,
    })
}

fn fold_prices(records: &[PriceRecord], pick: fn(f64, f64) -> f64) -> Option<f64> {
    records
        .iter()
        .map(|record| record.price)
        .reduce(pick)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_options() -> AggregateOptions {
        AggregateOptions {
            mode: ContentMode::Lines,
            sort: SortOrder::PriceDescending,
            product: None,
        }
    }

    #[test]
    fn general_listing_sorts_by_price_descending() {
        let content = "Arroz: Q10\nAzúcar: Q5\nAceite: Q20";
        let result = aggregate(content, &listing_options()).unwrap();
        let prices: Vec<f64> = result.records.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![20.0, 10.0, 5.0]);
        assert_eq!(result.min_price, Some(5.0));
        assert_eq!(result.max_price, Some(20.0));
    }

    #[test]
    fn specific_product_keeps_extraction_order() {
        let content = "Arroz: Q10\nArroz: Q5\nArroz: Q20";
        let options = AggregateOptions {
            mode: ContentMode::Lines,
            sort: SortOrder::None,
            product: Some("Arroz".to_string()),
        };
        let result = aggregate(content, &options).unwrap();
        let prices: Vec<f64> = result.records.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![10.0, 5.0, 20.0]);
    }

    #[test]
    fn drops_candidates_that_do_not_normalize() {
        let content = "Arroz: Q8.50\nAzúcar: consultar\nSal: -3";
        let result = aggregate(content, &listing_options()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.records[0].name, "Arroz");
    }

    #[test]
    fn repeated_names_stay_distinct_records() {
        let content = r#"{"productos":[
            {"nombre":"Huevos","precio":30,"tienda":"Tienda X"},
            {"nombre":"Huevos","precio":28,"tienda":"Tienda Y"}
        ]}"#;
        let options = AggregateOptions::default();
        let result = aggregate(content, &options).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_result_has_no_bounds() {
        let content = "No se encontró información";
        let result = aggregate(content, &listing_options()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.min_price, None);
        assert_eq!(result.max_price, None);
    }

    #[test]
    fn malformed_json_propagates_as_error() {
        let options = AggregateOptions {
            mode: ContentMode::Json,
            ..AggregateOptions::default()
        };
        assert!(aggregate("{not json", &options).is_err());
    }

    #[test]
    fn aggregation_is_idempotent() {
        let content = "Arroz - Q8.50\nProducto: Frijol, Precio estimado: Q15.00";
        let options = listing_options();
        let first = aggregate(content, &options).unwrap();
        let second = aggregate(content, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_results_message_names_the_product() {
        let options = AggregateOptions {
            product: Some("Arroz".to_string()),
            ..AggregateOptions::default()
        };
        assert_eq!(
            options.no_results_message(),
            "No se encontraron precios para Arroz."
        );
    }
}
