use crate::models::ExtractionResult;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io;

const TABLE_WIDTH: usize = 60;

/// Print the extracted prices as an aligned table: product, price, store,
/// followed by a summary line with the count and the price range.
pub fn print_results(result: &ExtractionResult) -> io::Result<()> {
    let name_width = result
        .records
        .iter()
        .map(|record| record.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Producto".len());

    execute!(
        io::stdout(),
        SetForegroundColor(Color::White),
        Print(format!("{:<width$}  {:>10}  Tienda\n", "Producto", "Precio", width = name_width)),
        ResetColor,
        Print("─".repeat(TABLE_WIDTH)),
        Print("\n"),
    )?;

    for record in &result.records {
        execute!(
            io::stdout(),
            Print(format!("{:<width$}  ", record.name, width = name_width)),
            SetForegroundColor(Color::Green),
            Print(format!("{:>10}", format!("Q{:.2}", record.price))),
            ResetColor,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("  {}\n", record.source.as_deref().unwrap_or("-"))),
            ResetColor,
        )?;
    }

    execute!(
        io::stdout(),
        Print("─".repeat(TABLE_WIDTH)),
        Print("\n"),
        SetForegroundColor(Color::DarkGrey),
        Print(summary_line(result)),
        Print("\n"),
        ResetColor,
    )?;

    Ok(())
}

/// Yellow notice for a valid-but-empty outcome.
pub fn print_no_results(message: &str) -> io::Result<()> {
    execute!(
        io::stdout(),
        SetForegroundColor(Color::Yellow),
        Print(format!("{}\n", message)),
        ResetColor,
    )
}

fn summary_line(result: &ExtractionResult) -> String {
    match (result.min_price, result.max_price) {
        (Some(min), Some(max)) => format!(
            "{} precios | mínimo Q{:.2} | máximo Q{:.2}",
            result.len(),
            min,
            max
        ),
        _ => format!("{} precios", result.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRecord;

    #[test]
    fn summary_line_shows_price_range() {
        let result = ExtractionResult {
            records: vec![
                PriceRecord {
                    name: "Arroz".to_string(),
                    price: 8.5,
                    source: None,
                },
                PriceRecord {
                    name: "Huevos".to_string(),
                    price: 30.0,
                    source: None,
                },
            ],
            min_price: Some(8.5),
            max_price: Some(30.0),
        };
        assert_eq!(summary_line(&result), "2 precios | mínimo Q8.50 | máximo Q30.00");
    }

    #[test]
    fn summary_line_without_bounds() {
        let result = ExtractionResult::default();
        assert_eq!(summary_line(&result), "0 precios");
    }
}
