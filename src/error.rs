use std::path::PathBuf;

use thiserror::Error;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file `{0}` does not exist")]
    MissingInput(PathBuf),

    #[error("expected exactly one column for `{field}`, found {candidates:?}")]
    SchemaMismatch { field: &'static str, candidates: Vec<String> },

    #[error(
        "usage must be 1–24 hours per day and 1–30 days per month, got {hours_per_day} h × {days_per_month} d"
    )]
    InvalidUsage { hours_per_day: u8, days_per_month: u8 },

    #[error("area must be positive, got {0} m²")]
    InvalidArea(f64),

    #[error("purchase price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("base rate must be a non-negative number, got `{0}`")]
    InvalidRate(String),

    #[error("appliance `{brand} {model}` is not in the catalog")]
    UnknownAppliance { brand: String, model: String },

    #[error("appliance `{brand} {model}` has no valid annual consumption")]
    MissingConsumption { brand: String, model: String },

    #[error("invalid scenario: {0}")]
    Scenario(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
