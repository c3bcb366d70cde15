use thiserror::Error;

/// Errors raised while decoding server-issued credential options or other
/// response payloads.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A field the payload must carry was absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A binary field was not valid base64url
    #[error("Invalid base64url in field: {field}")]
    Base64 { field: &'static str },

    /// The payload was not valid JSON for the expected shape
    #[error("Json conversion(Serde) error: {0}")]
    Json(#[from] serde_json::Error),
}
