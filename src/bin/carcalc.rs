use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;

use carcalc::*;

#[derive(clap::ValueEnum, Debug, Clone)]
enum Format {
    /// A human-readable panel
    Text,
    /// `{"transportation", "electricity", "diet", "waste", "total"}` in tonnes CO2 per year
    Json,
}

const ABOUT: &'static str = r#"Estimates the yearly carbon footprint (tonnes CO2 per year)
of a person from:
* the distance covered daily (km)
* the monthly electricity consumption (kWh)
* the waste created per week (kg)
* the meals cooked per day
using emission factors of the continent where they live.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// One of "North America", "Europe", "South America", "Asia", "Africa",
    /// "Antarctica", "Australia"
    #[arg(short, long)]
    continent: String,
    /// Distance covered daily, in km
    #[arg(short, long, default_value_t = 0.0)]
    distance: f64,
    /// Monthly electricity consumption, in kWh
    #[arg(short, long, default_value_t = 0.0)]
    electricity: f64,
    /// Waste created per week, in kg
    #[arg(short, long, default_value_t = 0.0)]
    waste: f64,
    /// Meals cooked per day
    #[arg(short, long, default_value_t = 0.0)]
    meals: f64,
    #[arg(short, long, value_enum, default_value_t=Format::Text)]
    format: Format,
    /// Also log debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()
        .unwrap();

    let table = EmissionFactorTable::new();
    let input = CalculationInput {
        continent: cli.continent,
        distance: cli.distance,
        electricity: cli.electricity,
        waste: cli.waste,
        meals: cli.meals,
    };

    let report = Report::new(&table, &input, time::OffsetDateTime::now_utc().date())?;
    log::info!("Total: {} tonnes CO2 per year", report.result.total);

    match cli.format {
        Format::Text => print!("{}", report.render()?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report.result)?),
    }
    Ok(())
}
