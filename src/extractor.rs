use crate::debug_println;
use crate::error::ExtractionError;
use crate::models::RawRecord;
use crate::parser;
use serde::Deserialize;
use serde_json::Value;

/// Phrase the upstream sources emit when they found nothing. Case-sensitive
/// by contract; its presence anywhere in the content means "no price known",
/// which is a valid empty result rather than an error.
pub const NO_INFO_SENTINEL: &str = "No se encontró información";

/// How the raw content should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Free text, one candidate per line.
    Lines,
    /// The agreed {"productos": [...]} document.
    Json,
    /// Try the JSON shape first, fall back to line parsing.
    Auto,
}

/// Expected JSON shape of an LLM price listing. The field names match the
/// prompts already deployed upstream and must not change.
#[derive(Debug, Deserialize)]
struct ProductListing {
    productos: Vec<ListedProduct>,
}

#[derive(Debug, Deserialize)]
struct ListedProduct {
    #[serde(default)]
    nombre: Option<String>,
    #[serde(default)]
    precio: Option<Value>,
    #[serde(default)]
    tienda: Option<String>,
}

/// Produce candidate records from a raw content blob.
///
/// Per-item noise (unrecognized lines, JSON elements missing fields) is
/// skipped; only a whole document that fails to match the JSON contract in
/// `Json` mode is an error.
pub fn extract(content: &str, mode: ContentMode) -> Result<Vec<RawRecord>, ExtractionError> {
    if content.contains(NO_INFO_SENTINEL) {
        debug_println!("Content carries the no-information sentinel, returning empty");
        return Ok(Vec::new());
    }

    match mode {
        ContentMode::Lines => Ok(extract_lines(content)),
        ContentMode::Json => extract_json(content),
        ContentMode::Auto => match extract_json(content) {
            Ok(records) => Ok(records),
            Err(_) => Ok(extract_lines(content)),
        },
    }
}

fn extract_lines(content: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parser::parse_line(line) {
            Some(record) => records.push(record),
            None => debug_println!("Skipping unrecognized line: {}", line),
        }
    }

    records
}

fn extract_json(content: &str) -> Result<Vec<RawRecord>, ExtractionError> {
    let listing: ProductListing = serde_json::from_str(content)?;

    let mut records = Vec::new();
    for item in listing.productos {
        let name = match item.nombre {
            Some(ref name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => {
                debug_println!("Skipping element without nombre");
                continue;
            }
        };

        // precio may arrive as a JSON number or as a string token.
        let raw_price = match item.precio {
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::String(token)) => token,
            _ => {
                debug_println!("Skipping element without precio: {}", name);
                continue;
            }
        };

        let source = item.tienda.filter(|tienda| !tienda.trim().is_empty());
        records.push(RawRecord {
            name,
            raw_price,
            source,
        });
    }

    Ok(records)
}
