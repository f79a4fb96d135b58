use thiserror::Error;

#[derive(Error, Debug)]
pub enum SunpathError {
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("position fetcher failed: {0}")]
    Fetcher(String),
    #[error("position fetcher returned {actual} samples for {expected} timestamps")]
    SampleCountMismatch { expected: usize, actual: usize },
    #[error("position fetcher returned a timestamp at index {index} that was not requested")]
    TimestampMismatch { index: usize },
    #[error(
        "position fetcher answered for ({actual_latitude}, {actual_longitude}) instead of ({latitude}, {longitude})"
    )]
    CoordinateMismatch {
        latitude: f64,
        longitude: f64,
        actual_latitude: f64,
        actual_longitude: f64,
    },
    #[error("failed to render chart")]
    Render(#[from] std::fmt::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SunpathError>;
