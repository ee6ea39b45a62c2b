use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use preciogt::aggregator::{aggregate, AggregateOptions, SortOrder};
use preciogt::extractor::ContentMode;
use preciogt::{debug, tui, utils};
use std::io::Read;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Preciogt - comparador de precios para Guatemala")]
struct Args {
    /// File with the raw search or LLM output (reads stdin if omitted)
    #[clap(short, long)]
    input: Option<String>,

    /// Content format: lines, json or auto
    #[clap(short, long, default_value = "auto")]
    format: String,

    /// Specific product that was queried (keeps extraction order)
    #[clap(short, long)]
    product: Option<String>,

    /// CSV history file to merge the results into
    #[clap(short, long)]
    output: Option<String>,

    /// Print records as JSON instead of a table
    #[clap(short, long)]
    json: bool,

    /// Enable debug output
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    debug::set_debug(args.debug);

    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("Failed to read input file: {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read content from stdin")?;
            buffer
        }
    };

    let mode = match args.format.as_str() {
        "lines" => ContentMode::Lines,
        "json" => ContentMode::Json,
        "auto" => ContentMode::Auto,
        other => bail!("Unknown format: {} (expected lines, json or auto)", other),
    };

    // A specific-product query keeps the order the source produced;
    // a general listing is shown highest price first.
    let sort = if args.product.is_some() {
        SortOrder::None
    } else {
        SortOrder::PriceDescending
    };

    let options = AggregateOptions {
        mode,
        sort,
        product: args.product.clone(),
    };

    let result = aggregate(&content, &options).context("Failed to extract prices")?;

    if result.is_empty() {
        tui::print_no_results(&options.no_results_message())?;
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.records)?);
    } else {
        tui::print_results(&result)?;
    }

    if let Some(output) = &args.output {
        let existing = utils::load_records_from_csv(output)?;
        let new_records = utils::compare_records(&existing, &result.records);

        let mut all_records = existing;
        all_records.extend(new_records);
        utils::save_records_to_csv(&all_records, output, Local::now().date_naive())?;
    }

    Ok(())
}
