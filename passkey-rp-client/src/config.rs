//! Protocol constants for the relying-party REST surface.

/// Endpoint paths, all POST with JSON bodies.
pub(crate) const AUTHENTICATE_PATH: &str = "/v1/authenticate";
pub(crate) const SIGNUP_PATH: &str = "/v1/signup";
pub(crate) const VALIDATE_PATH: &str = "/v1/validate";
pub(crate) const CHALLENGE_PATH: &str = "/v1/challenge";
pub(crate) const REGISTER_PATH: &str = "/v1/register";
pub(crate) const SIGNIN_PATH: &str = "/v1/signin";

/// Token-type label assumed when the server omits `token_type`.
pub(crate) const DEFAULT_TOKEN_TYPE: &str = "Bearer";
