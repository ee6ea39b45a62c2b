/// Convert a raw price token into a numeric value.
///
/// Handles the formats seen in search snippets and LLM answers: a plain
/// number, a number with currency symbol and thousands separators
/// ("Q1,234.56"), a decimal comma ("123,45"), or a min-max range
/// ("Q100-Q200"), which yields the arithmetic mean. Returns None for
/// anything that does not contain a usable number.
pub fn normalize(token: &str) -> Option<f64> {
    let cleaned = strip_token(token);

    // A hyphen splitting the token into exactly two numbers is a range.
    // Anything else with a hyphen (leading minus, trailing dash) falls
    // through to single-number parsing.
    if cleaned.contains('-') {
        let parts: Vec<&str> = cleaned.split('-').collect();
        if parts.len() == 2 {
            if let (Ok(low), Ok(high)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
                return Some((low + high) / 2.0);
            }
        }
    }

    cleaned.parse::<f64>().ok()
}

/// Reduce a token to digits, decimal points and hyphens, resolving comma
/// semantics first: a single comma with exactly two digits after it and no
/// dot anywhere is a decimal comma, every other comma is a thousands
/// separator.
fn strip_token(token: &str) -> String {
    let kept: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | ','))
        .collect();

    if !kept.contains('.') && kept.matches(',').count() == 1 {
        let (head, tail) = kept.split_once(',').unwrap();
        if tail.len() == 2 && tail.chars().all(|c| c.is_ascii_digit()) {
            return format!("{}.{}", head, tail);
        }
    }

    kept.replace(',', "")
}
