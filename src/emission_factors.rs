use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Continent, Error};

/// Emission factors of a continent, in kg of CO2 per unit of activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// kg CO2 / km travelled
    pub transportation: f64,
    /// kg CO2 / kWh consumed
    pub electricity: f64,
    /// kg CO2 / meal cooked
    pub diet: f64,
    /// kg CO2 / kg of waste
    pub waste: f64,
}

/// A record of `src/emission_factors.csv`
#[derive(Debug, Deserialize, Serialize)]
struct Row {
    continent: Continent,
    transportation: f64,
    electricity: f64,
    diet: f64,
    waste: f64,
}

impl Row {
    fn new(continent: Continent, factors: &EmissionFactors) -> Self {
        Self {
            continent,
            transportation: factors.transportation,
            electricity: factors.electricity,
            diet: factors.diet,
            waste: factors.waste,
        }
    }

    fn into_entry(self) -> (Continent, EmissionFactors) {
        (
            self.continent,
            EmissionFactors {
                transportation: self.transportation,
                electricity: self.electricity,
                diet: self.diet,
                waste: self.waste,
            },
        )
    }
}

static EMISSION_FACTORS: &'static [u8] = include_bytes!("./emission_factors.csv");

/// The emission factors of every [`Continent`]. Built once and shared by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactorTable(HashMap<Continent, EmissionFactors>);

impl EmissionFactorTable {
    /// Returns the table stored in `src/emission_factors.csv`.
    /// # Panics
    /// Panics if the embedded file is malformed or misses a continent.
    pub fn new() -> Self {
        let table = Self(
            crate::csv::deserialize::<Row>(EMISSION_FACTORS)
                .map(|row| {
                    row.expect("src/emission_factors.csv to be deserializable")
                        .into_entry()
                })
                .collect(),
        );
        for continent in Continent::ALL {
            assert!(
                table.0.contains_key(&continent),
                "src/emission_factors.csv to contain {continent}"
            );
        }
        table
    }

    /// Returns the factors of `continent`
    pub fn get(&self, continent: Continent) -> &EmissionFactors {
        // `new` guarantees that every continent is present
        &self.0[&continent]
    }

    /// Returns the factors of the continent named `continent` (e.g. `Europe`).
    /// # Error
    /// Errors with [`Error::UnknownContinent`] if it is not one of [`Continent::ALL`]
    pub fn lookup(&self, continent: &str) -> Result<&EmissionFactors, Error> {
        Ok(self.get(continent.parse()?))
    }

    /// Returns all continents and their factors, in [`Continent::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Continent, &EmissionFactors)> + '_ {
        Continent::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Serializes the table to CSV, in the same format it is stored.
    pub fn to_csv(&self) -> Result<Vec<u8>, Error> {
        crate::csv::serialize(self.iter().map(|(continent, factors)| Row::new(continent, factors)))
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::new()
    }
}
