use carcalc::{
    calculate, CalculationInput, CalculationResult, Continent, EmissionFactorTable, Error,
};

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn input(
    continent: Continent,
    distance: f64,
    electricity: f64,
    waste: f64,
    meals: f64,
) -> CalculationInput {
    CalculationInput {
        continent: continent.name().to_string(),
        distance,
        electricity,
        waste,
        meals,
    }
}

/// Europe, 10 km/day, 100 kWh/month, 5 kg/week, 1 meal/day.
/// 1.1 * 3650 / 1000 is 4.015000000000001 in f64, which rounds to 4.02.
#[test]
fn acceptance_europe() {
    let table = EmissionFactorTable::new();
    let result = calculate(&table, &input(Continent::Europe, 10.0, 100.0, 5.0, 1.0)).unwrap();

    assert_eq!(result.transportation, 4.02);
    assert_eq!(result.electricity, 2.34);
    assert_eq!(result.diet, 0.40);
    assert_eq!(result.waste, 0.04);
    assert_eq!(result.total, 6.80);
}

/// North America, 50 kWh/month only: 4.79 * 600 = 2874 kg
#[test]
fn acceptance_north_america() {
    let table = EmissionFactorTable::new();
    let result =
        calculate(&table, &input(Continent::NorthAmerica, 0.0, 50.0, 0.0, 0.0)).unwrap();

    assert_eq!(
        result,
        CalculationResult {
            transportation: 0.0,
            electricity: 2.87,
            diet: 0.0,
            waste: 0.0,
            total: 2.87,
        }
    );
}

#[test]
fn other_continents() {
    let table = EmissionFactorTable::new();
    let cases = [
        (input(Continent::Asia, 20.0, 300.0, 10.0, 3.0), [18.98, 14.4, 4.6, 1.72, 39.7]),
        (input(Continent::Africa, 15.0, 200.0, 8.0, 2.0), [18.94, 5.83, 1.88, 1.29, 27.94]),
        (input(Continent::Antarctica, 1.0, 1.0, 1.0, 1.0), [1.51, 0.01, 0.77, 0.11, 2.4]),
        (input(Continent::Australia, 5.0, 150.0, 4.0, 2.0), [3.83, 2.74, 1.97, 0.64, 9.18]),
        (input(Continent::SouthAmerica, 30.0, 250.0, 6.0, 3.0), [2.3, 3.6, 2.3, 0.06, 8.26]),
        (input(Continent::NorthAmerica, 12.5, 420.0, 7.5, 2.5), [8.44, 24.14, 4.56, 0.04, 37.18]),
    ];
    for (input, [transportation, electricity, diet, waste, total]) in cases {
        let result = calculate(&table, &input).unwrap();
        assert_eq!(
            result,
            CalculationResult {
                transportation,
                electricity,
                diet,
                waste,
                total
            },
            "{}",
            input.continent
        );
    }
}

#[test]
fn zero_input_is_zero_footprint() {
    let table = EmissionFactorTable::new();
    for continent in Continent::ALL {
        let result = calculate(&table, &input(continent, 0.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(result, CalculationResult::default());
    }
}

#[test]
fn no_eighth_region() {
    let table = EmissionFactorTable::new();
    for name in ["Oceania", "Middle East", "europe", "EUROPE", "World"] {
        let input = CalculationInput {
            continent: name.to_string(),
            distance: 1.0,
            electricity: 1.0,
            waste: 1.0,
            meals: 1.0,
        };
        assert!(matches!(calculate(&table, &input), Err(Error::UnknownContinent(_))));
        assert!(matches!(table.lookup(name), Err(Error::UnknownContinent(_))));
    }
}

/// Increasing any single quantity never decreases its category nor the total
#[test]
fn monotonic() {
    let table = EmissionFactorTable::new();
    let steps = (0..200).map(|i| i as f64 * 0.37).collect::<Vec<_>>();
    for continent in Continent::ALL {
        for quantity in 0..4 {
            let mut previous = CalculationResult::default();
            for value in &steps {
                let mut values = [1.0, 10.0, 2.0, 1.0];
                values[quantity] = *value;
                let [distance, electricity, waste, meals] = values;
                let raw = input(continent, distance, electricity, waste, meals);
                let result = calculate(&table, &raw).unwrap();

                let category = |r: &CalculationResult| match quantity {
                    0 => r.transportation,
                    1 => r.electricity,
                    2 => r.waste,
                    _ => r.diet,
                };
                if *value > 0.0 {
                    assert!(category(&result) >= category(&previous));
                    assert!(result.total >= previous.total);
                }
                previous = result;
            }
        }
    }
}

/// Doubling the distance doubles transportation, up to rounding
#[test]
fn linear_in_distance() {
    let table = EmissionFactorTable::new();
    for continent in Continent::ALL {
        for distance in [0.5, 1.0, 7.0, 33.3, 120.0] {
            let single = input(continent, distance, 10.0, 1.0, 1.0);
            let single = calculate(&table, &single).unwrap();
            let double = input(continent, 2.0 * distance, 10.0, 1.0, 1.0);
            let double = calculate(&table, &double).unwrap();
            assert!(
                abs_difference(double.transportation, 2.0 * single.transportation) <= 0.01 + 1e-9,
                "{continent} {distance}"
            );
        }
    }
}

#[test]
fn json_record() {
    let table = EmissionFactorTable::new();
    let result = calculate(&table, &input(Continent::Europe, 10.0, 100.0, 5.0, 1.0)).unwrap();
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "transportation": 4.02,
            "electricity": 2.34,
            "diet": 0.4,
            "waste": 0.04,
            "total": 6.8,
        })
    );
}

/// A finite but huge quantity fails instead of producing an infinite footprint,
/// which would be written as `null` in JSON
#[test]
fn huge_distance_is_rejected() {
    let table = EmissionFactorTable::new();
    let result = calculate(&table, &input(Continent::Asia, 1e307, 0.0, 0.0, 0.0));
    assert!(matches!(result, Err(Error::Overflow("transportation"))));
}

/// `carcalc --format json` writes only the JSON record to stdout; logs go to stderr
#[cfg(feature = "build-binary")]
#[test]
fn cli_json_stdout_is_parseable() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_carcalc"))
        .args(["-c", "Europe", "-d", "10", "-e", "100", "-w", "5", "-m", "1", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], serde_json::json!(6.8));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Total: 6.8"));
}
