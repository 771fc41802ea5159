use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid year text `{input}`: expected a 4-digit year")]
    InvalidYearText { input: String },

    #[error("unknown attribute `{name}`")]
    UnknownAttribute { name: String },

    #[error("csv decode failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "remote-data")]
    #[error("dataset fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}
