use crate::CalculationResult;

/// Average yearly footprint of a person, in tonnes of CO2
pub const AVERAGE_FOOTPRINT_TONNES: f64 = 4.70;

/// How a footprint compares to [`AVERAGE_FOOTPRINT_TONNES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    /// at or above the average
    AboveAverage,
    BelowAverage,
}

impl Assessment {
    pub fn of(result: &CalculationResult) -> Self {
        if result.total >= AVERAGE_FOOTPRINT_TONNES {
            Self::AboveAverage
        } else {
            Self::BelowAverage
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AboveAverage => concat!(
                "Your carbon footprint is too high. ",
                "Try using more energy saving resources in your life"
            ),
            Self::BelowAverage => "Your carbon footprint is below average. Keep it up!!",
        }
    }
}
