use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the game service.
///
/// Every variant is a transport or HTTP failure; the client never interprets
/// or retries them.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, timeout, or a body that could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("game service responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request(err) => err.status(),
            Error::Status { status, .. } => Some(*status),
            Error::Url(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
