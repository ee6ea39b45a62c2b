use crate::models::RawRecord;
use regex::Regex;

/// The line shapes produced by the various upstream sources. Search snippets
/// and LLM answers disagree on how they delimit a product from its price, so
/// each known shape is its own pattern and new ones can be added without
/// touching the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    /// "Producto: Frijol, Precio estimado: Q15.00"
    Labeled,
    /// "Arroz: Q8.50" (exactly one colon)
    NameColonPrice,
    /// "Arroz - Q8.50"
    DashQuetzal,
}

/// Patterns in matching priority order. The labeled form goes first because
/// its lines also contain colons and dashes and would otherwise be
/// mis-parsed by the simpler shapes.
pub const PATTERN_PRIORITY: [LinePattern; 3] = [
    LinePattern::Labeled,
    LinePattern::NameColonPrice,
    LinePattern::DashQuetzal,
];

impl LinePattern {
    /// Try to read a candidate out of one line. Returns None when the line
    /// does not have this shape.
    pub fn try_match(&self, line: &str) -> Option<RawRecord> {
        match self {
            LinePattern::Labeled => {
                let re = Regex::new(r"Producto:\s*([^,]+),.*Precio estimado:\s*(.+)$").unwrap();
                let captures = re.captures(line)?;
                let name = captures.get(1).unwrap().as_str().trim();
                let price = captures.get(2).unwrap().as_str().trim();
                build_record(name, price)
            }
            LinePattern::NameColonPrice => {
                // More than one colon means we would have to guess which one
                // delimits the price; skip instead of mis-parsing.
                if line.matches(':').count() != 1 {
                    return None;
                }
                let (name, price) = line.split_once(':')?;
                build_record(name.trim(), price.trim())
            }
            LinePattern::DashQuetzal => {
                let (name, price) = line.split_once(" - Q")?;
                build_record(name.trim(), price.trim())
            }
        }
    }
}

fn build_record(name: &str, price: &str) -> Option<RawRecord> {
    if name.is_empty() || price.is_empty() {
        return None;
    }
    Some(RawRecord::new(name, price))
}

/// Match one line against the known patterns in priority order.
pub fn parse_line(line: &str) -> Option<RawRecord> {
    PATTERN_PRIORITY.iter().find_map(|pattern| pattern.try_match(line))
}
