pub mod aggregator;
pub mod debug;
pub mod error;
pub mod extractor;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod tui;
pub mod utils;

pub use aggregator::{aggregate, AggregateOptions, SortOrder};
pub use error::ExtractionError;
pub use extractor::{extract, ContentMode, NO_INFO_SENTINEL};
pub use models::{ExtractionResult, PriceRecord, RawRecord};
pub use normalizer::normalize;
