use serde::{Deserialize, Serialize};

use crate::{calculate, CalculationInput, CalculationResult, EmissionFactorTable, Error};

/// A [`CalculationInput`] and its [`CalculationResult`], as one CSV record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub continent: String,
    pub distance: f64,
    pub electricity: f64,
    pub waste: f64,
    pub meals: f64,
    pub transportation_tonnes: f64,
    pub electricity_tonnes: f64,
    pub diet_tonnes: f64,
    pub waste_tonnes: f64,
    pub total_tonnes: f64,
}

impl BatchRecord {
    pub fn new(input: CalculationInput, result: CalculationResult) -> Self {
        Self {
            continent: input.continent,
            distance: input.distance,
            electricity: input.electricity,
            waste: input.waste,
            meals: input.meals,
            transportation_tonnes: result.transportation,
            electricity_tonnes: result.electricity,
            diet_tonnes: result.diet,
            waste_tonnes: result.waste,
            total_tonnes: result.total,
        }
    }
}

/// The outcome of [`calculate_batch`]
#[derive(Debug, Default)]
pub struct Batch {
    pub records: Vec<BatchRecord>,
    /// rows that could not be computed, with their 1-based position (header excluded)
    pub failures: Vec<(usize, Error)>,
}

/// Computes every row of a CSV with header `continent,distance,electricity,waste,meals`.
/// Rows that cannot be read or computed are logged and skipped.
pub fn calculate_batch(table: &EmissionFactorTable, data: &[u8]) -> Batch {
    let mut batch = Batch::default();
    for (i, input) in crate::csv::deserialize::<CalculationInput>(data).enumerate() {
        let row = i + 1;
        match input.and_then(|input| calculate(table, &input).map(|r| (input, r))) {
            Ok((input, result)) => batch.records.push(BatchRecord::new(input, result)),
            Err(e) => {
                log::warn!("row {row} skipped: {e}");
                batch.failures.push((row, e));
            }
        }
    }
    log::info!(
        "computed {} rows, skipped {}",
        batch.records.len(),
        batch.failures.len()
    );
    batch
}
