use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Continent '{0}' is not one of {}", crate::Continent::names())]
    UnknownContinent(String),

    /// A quantity that is negative or not finite
    #[error("Invalid {field}: {value} (expected a finite number >= 0)")]
    Validation { field: &'static str, value: f64 },

    /// An emission of the named category too large to be represented
    #[error("The {0} emissions are too large to be represented")]
    Overflow(&'static str),

    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to render report: {0}")]
    Template(#[from] tinytemplate::error::Error),
}
