use crate::{
    AnnualActivity, CalculationInput, CalculationResult, Continent, EmissionFactorTable, Error,
};

const DAYS_PER_YEAR: f64 = 365.0;
const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const KG_PER_TONNE: f64 = 1000.0;

/// Rounds `value` to 2 decimal places, with ties to even on `value * 100`
/// (e.g. `0.125` -> `0.12`, `0.135` -> `0.14`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Multiplies `value` by `periods` only if it is positive
fn annualize(value: f64, periods: f64) -> f64 {
    if value > 0.0 {
        value * periods
    } else {
        value
    }
}

fn validate(field: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Validation { field, value })
    }
}

impl CalculationInput {
    /// Returns the continent of this input.
    /// # Error
    /// Errors with [`Error::UnknownContinent`] if it is not one of [`Continent::ALL`]
    pub fn continent(&self) -> Result<Continent, Error> {
        self.continent.parse()
    }

    /// Returns the yearly totals of this input (days: 365, weeks: 52, months: 12).
    /// # Error
    /// Errors with [`Error::Validation`] if any quantity is negative or not finite
    pub fn annual(&self) -> Result<AnnualActivity, Error> {
        Ok(AnnualActivity {
            distance: annualize(validate("distance", self.distance)?, DAYS_PER_YEAR),
            electricity: annualize(
                validate("electricity", self.electricity)?,
                MONTHS_PER_YEAR,
            ),
            waste: annualize(validate("waste", self.waste)?, WEEKS_PER_YEAR),
            meals: annualize(validate("meals", self.meals)?, DAYS_PER_YEAR),
        })
    }
}

/// Converts `annual` units of activity into tonnes of CO2, rounded to 2 decimals
fn tonnes(category: &'static str, factor: f64, annual: f64) -> Result<f64, Error> {
    let tonnes = round2(factor * annual / KG_PER_TONNE);
    if tonnes.is_finite() {
        Ok(tonnes)
    } else {
        Err(Error::Overflow(category))
    }
}

/// Returns the continent, the yearly activity and the emissions of `input`.
pub(crate) fn footprint(
    table: &EmissionFactorTable,
    input: &CalculationInput,
) -> Result<(Continent, AnnualActivity, CalculationResult), Error> {
    let continent = input.continent()?;
    let factors = table.get(continent);
    let annual = input.annual()?;

    let transportation = tonnes("transportation", factors.transportation, annual.distance)?;
    let electricity = tonnes("electricity", factors.electricity, annual.electricity)?;
    let diet = tonnes("diet", factors.diet, annual.meals)?;
    let waste = tonnes("waste", factors.waste, annual.waste)?;

    // each category is below f64::MAX / 1000, so their sum cannot overflow
    let result = CalculationResult {
        transportation,
        electricity,
        diet,
        waste,
        total: round2(transportation + electricity + diet + waste),
    };
    log::debug!("{continent}: {result:?}");
    Ok((continent, annual, result))
}

/// Computes the yearly emissions of `input` using the factors of its continent.
///
/// Each category is computed in kg, converted to tonnes and rounded to 2 decimals.
/// The total is the sum of the rounded categories, rounded again.
/// # Error
/// * [`Error::UnknownContinent`] if the continent is not in `table`
/// * [`Error::Validation`] if a quantity is negative or not finite
/// * [`Error::Overflow`] if an emission is too large to be represented
pub fn calculate(
    table: &EmissionFactorTable,
    input: &CalculationInput,
) -> Result<CalculationResult, Error> {
    footprint(table, input).map(|(_, _, result)| result)
}
