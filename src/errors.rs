use thiserror::Error;

/// Failure of a single backend request. Nothing is retried or logged here;
/// callers decide whether to surface the error or fall back to fixture data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered with a non-success status. Carries the name of
    /// the data set that was being fetched; the body is never decoded.
    #[error("Failed to fetch {0}")]
    Status(&'static str),

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}
