use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;

use carcalc::{calculate_batch, EmissionFactorTable};

const ABOUT: &'static str = r#"Estimates the yearly carbon footprint of every row of a CSV file with
columns `continent,distance,electricity,waste,meals` (km/day, kWh/month, kg/week, meals/day)
and writes them, followed by the emissions of each category and their total
(tonnes CO2 per year), to another CSV file.
Rows that cannot be computed are logged and skipped.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// The CSV file to read
    #[arg(short, long)]
    input: String,
    /// The CSV file to write
    #[arg(short, long, default_value = "footprints.csv")]
    output: String,
    /// Fail if any row was skipped
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let table = EmissionFactorTable::new();
    let data = std::fs::read(&cli.input)?;
    let batch = calculate_batch(&table, &data);

    if cli.strict && !batch.failures.is_empty() {
        return Err(format!("{} rows of {} were skipped", batch.failures.len(), cli.input).into());
    }

    std::fs::write(&cli.output, carcalc::csv::serialize(batch.records.iter())?)?;
    log::info!("Footprints written to {}", cli.output);
    Ok(())
}
