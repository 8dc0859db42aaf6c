use serde::{Deserialize, Serialize};

/// The raw quantities entered by a person, each in its own period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculationInput {
    /// name of the continent (e.g. `Europe`)
    pub continent: String,
    /// km travelled per day
    pub distance: f64,
    /// kWh consumed per month
    pub electricity: f64,
    /// kg of waste created per week
    pub waste: f64,
    /// meals cooked per day
    pub meals: f64,
}

/// The quantities of [`CalculationInput`] converted to yearly totals.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AnnualActivity {
    /// km / year
    pub distance: f64,
    /// kWh / year
    pub electricity: f64,
    /// kg / year
    pub waste: f64,
    /// meals / year
    pub meals: f64,
}

/// Yearly emissions per category, in tonnes of CO2, each rounded to 2 decimals.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculationResult {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    /// the sum of the (rounded) categories, rounded again
    pub total: f64,
}
