use thiserror::Error;

use crate::extract::PropertyKey;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP client initialization failed: {0}")]
    Client(String),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Transport { url: String, status: u16 },

    #[error("value {value:?} for key {key:?} is not numeric")]
    Parse { key: String, value: String },

    #[error("required key {0:?} is missing")]
    MissingKey(PropertyKey),

    #[error("label/value pairing violated: {0}")]
    PairMismatch(String),

    #[error("file operation failed: {0}")]
    FileIo(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}
