use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdcrawlError>;

#[derive(Debug, Error)]
pub enum AdcrawlError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Fetch(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}
