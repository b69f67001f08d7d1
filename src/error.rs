//! Decode Errors
//!
//! Failure reporting for redirect-URI response decoding. A decode failure
//! means "this URI does not carry a well-formed response of the requested
//! type". It is never a transport error, and a well-formed protocol error
//! response (`error=...`) is a successful decode of the error type, not a
//! failure.

use thiserror::Error;

/// Reasons a redirect URI failed to decode into a response type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("the redirect URI carries no fragment")]
    MissingFragment,

    #[error("parameter `{name}` is not a non-negative number of seconds: `{value}`")]
    InvalidNumber { name: &'static str, value: String },

    #[error("parameter `{name}` is not a valid URI reference: `{value}`")]
    InvalidUri { name: &'static str, value: String },
}

/// Result type for redirect-URI decoding.
pub type ParseResult<T> = Result<T, ParseError>;
