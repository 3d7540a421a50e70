use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("api error: {0}")]
    Api(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Page(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

// Display text is what the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Slug not found")]
    SlugMissing,
    #[error("Failed to load salon")]
    SalonFetchFailed { slug: String, reason: String },
    #[error("Salon not found")]
    SalonNotOk { slug: String, status: u16 },
    #[error("Invalid response")]
    SalonParseFailed { slug: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("metrics request failed: {0}")]
    FetchFailed(String),
    #[error("metrics unavailable (status {0})")]
    NotOk(u16),
    #[error("metrics payload invalid: {0}")]
    ParseFailed(String),
}
