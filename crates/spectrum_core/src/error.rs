use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The news provider could not be reached or refused the request.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The provider answered, but the body is not a valid record.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Metrics submission failed: {0}")]
    MetricsSubmission(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// True for the "fetch failed / malformed response" condition pages
    /// report to the reader instead of a generic server error.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Fetch(_) | Error::MalformedResponse(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
