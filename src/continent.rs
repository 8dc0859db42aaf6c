use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// One of the regions with its own set of emission factors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    #[serde(rename = "South America")]
    SouthAmerica,
    Asia,
    Africa,
    Antarctica,
    Australia,
}

impl Continent {
    /// All continents, in the order they are offered for selection
    pub const ALL: [Continent; 7] = [
        Continent::NorthAmerica,
        Continent::Europe,
        Continent::SouthAmerica,
        Continent::Asia,
        Continent::Africa,
        Continent::Antarctica,
        Continent::Australia,
    ];

    /// Returns the human-readable name (e.g. `North America`)
    pub fn name(&self) -> &'static str {
        match self {
            Continent::NorthAmerica => "North America",
            Continent::Europe => "Europe",
            Continent::SouthAmerica => "South America",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Australia => "Australia",
        }
    }

    /// Returns the names of all continents, comma-separated
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Continent {
    type Err = Error;

    /// Exact (case-sensitive) match on [`Continent::name`]. There is no fallback region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownContinent(s.to_string()))
    }
}
