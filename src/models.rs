use crate::normalizer;
use serde::{Deserialize, Serialize};

/// A parsed but not yet validated name/price candidate as it came out of the
/// extractor. The price is still the raw token from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub raw_price: String,
    pub source: Option<String>,
}

impl RawRecord {
    pub fn new(name: &str, raw_price: &str) -> Self {
        Self {
            name: name.to_string(),
            raw_price: raw_price.to_string(),
            source: None,
        }
    }
}

/// A validated price entry. `price` is always finite and non-negative;
/// candidates that do not normalize to such a value never become records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub name: String,
    pub price: f64,
    pub source: Option<String>,
}

impl PriceRecord {
    /// Normalize the raw price token and build a validated record.
    /// Returns None when the token is not a usable price.
    pub fn from_raw(raw: RawRecord) -> Option<Self> {
        let price = normalizer::normalize(&raw.raw_price)?;
        if !price.is_finite() || price < 0.0 {
            return None;
        }
        Some(Self {
            name: raw.name,
            price,
            source: raw.source,
        })
    }
}

/// Final output of an aggregation run: the surviving records plus the price
/// range over them. Both bounds are absent when no record survived.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractionResult {
    pub records: Vec<PriceRecord>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
