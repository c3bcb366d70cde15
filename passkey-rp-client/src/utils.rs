use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine as _, alphabet};

use thiserror::Error;

/// Base64url engine for WebAuthn wire fields.
///
/// Encodes unpadded. Decoding accepts optional trailing padding and
/// non-canonical trailing bits, since relying parties commonly derive these
/// values from standard base64 output.
const URL_SAFE_RELAXED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode raw bytes to unpadded base64url.
pub fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_RELAXED.encode(input)
}

/// Decode a base64url string into raw bytes.
pub fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    URL_SAFE_RELAXED
        .decode(input)
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}
