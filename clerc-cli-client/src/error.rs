use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ClercError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ClercError {
    #[error("Request failed")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status: {actual}")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
    },

    #[error("Malformed response body")]
    Decode(#[from] serde_json::Error),

    #[error("Error parsing configuration file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Argument(String),

    #[error("Error reading standard input")]
    Stdin(#[source] std::io::Error),
}
