use thiserror::Error;

use crate::catalog::FetchError;

#[derive(Error, Debug)]
pub enum CisaVulnError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid flag value: {0}")]
    InvalidFlag(String),
}

pub type Result<T> = std::result::Result<T, CisaVulnError>;
