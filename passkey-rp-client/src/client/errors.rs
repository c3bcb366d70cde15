use reqwest::StatusCode;
use thiserror::Error;

use crate::options::DecodeError;

/// Errors produced by relying-party client operations.
///
/// Every operation either fully succeeds or fails with exactly one of these;
/// nothing is retried or recovered silently. Cancellation is not an error
/// value: dropping an operation's future aborts the in-flight request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response was never received
    /// (network, DNS or TLS failure)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 200-299 range; carries the raw
    /// response body as the failure detail
    #[error("Server returned {status}: {body}")]
    Protocol { status: StatusCode, body: String },

    /// A response payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}
