//! Fetch Errors
//!
//! Every failure of a catalog request ends up as one of these. The UI shows
//! the `Display` text verbatim inside the retry alert.

use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Network, DNS or abort failure reported by the transport.
    #[error("{0}")]
    Transport(String),

    /// Body was JSON but not a shape the view understands.
    #[error("Invalid response format")]
    InvalidFormat,

    /// Body could not be decoded at all.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// HTTP status code, when the failure came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}
