use thiserror::Error;

pub type Result<T> = std::result::Result<T, TelemetryError>;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unknown forecast type: {0}")]
    UnknownForecastCategory(String),

    #[error("Record has no 'type' or 'category' discriminant")]
    MissingDiscriminant,

    #[error("{category} record is missing required field '{field}'")]
    MissingField { category: String, field: &'static str },

    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Field '{field}' must be a finite number")]
    NonFiniteValue { field: &'static str },

    #[error("Forecast range is inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
