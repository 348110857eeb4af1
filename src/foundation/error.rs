/// Crate-wide result alias.
pub type CardResult<T> = Result<T, CardError>;

/// Errors that abort a card render.
///
/// Only the account lookup and the background fetch are fatal; every other asset failure is
/// reported as a [`FetchError`] and degrades the card instead.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Caller supplied unusable input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Account metadata could not be fetched or parsed.
    #[error("account error: {0}")]
    Account(#[source] FetchError),

    /// Background image could not be fetched or decoded.
    #[error("background error: {0}")]
    Background(#[source] FetchError),

    /// PNG serialization failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

/// Why a single upstream fetch produced nothing usable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status.
    #[error("upstream status {0}")]
    Status(u16),

    /// Response body could not be read.
    #[error("body read failure: {0}")]
    Body(String),

    /// Body was not a decodable image.
    #[error("image decode failure: {0}")]
    Decode(String),

    /// Body was not the expected JSON document.
    #[error("json parse failure: {0}")]
    Parse(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
