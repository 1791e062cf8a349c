#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { value: f64 },
    #[error("{parameter} is not finite: {value}")]
    NonFinite { parameter: &'static str, value: f64 },
    #[error("Unknown distance unit: {0}")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
