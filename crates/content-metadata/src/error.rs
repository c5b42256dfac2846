//! Errors for the fallible edges of the engine: decoding upstream metadata
//! and parsing preview URLs. Extraction itself never fails.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetadataError>;

#[derive(Error, Debug)]
pub enum MetadataError {
    /// Metadata document is not valid JSON
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Metadata document is not valid CBOR
    #[error("CBOR decode error: {0}")]
    Cbor(String),

    /// Source URL could not be parsed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}
