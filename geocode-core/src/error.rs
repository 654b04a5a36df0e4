use thiserror::Error;

/// Everything that can go wrong between sending the search request and
/// picking the first match.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Address not found")]
    NotFound,
}
