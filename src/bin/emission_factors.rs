use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;

use carcalc::EmissionFactorTable;

#[derive(clap::ValueEnum, Debug, Clone)]
enum Format {
    Csv,
    Json,
}

const ABOUT: &'static str = r#"Prints the emission factors used per continent, in kg CO2 per:
* km travelled (`transportation`)
* kWh consumed (`electricity`)
* meal cooked (`diet`)
* kg of waste (`waste`)
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    #[arg(short, long, value_enum, default_value_t=Format::Csv)]
    format: Format,
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let table = EmissionFactorTable::new();
    match cli.format {
        Format::Csv => print!("{}", String::from_utf8(table.to_csv()?)?),
        Format::Json => {
            let mut value = serde_json::Map::new();
            for (continent, factors) in table.iter() {
                value.insert(continent.name().to_string(), serde_json::to_value(factors)?);
            }
            println!("{}", serde_json::to_string_pretty(&value)?)
        }
    }
    Ok(())
}
