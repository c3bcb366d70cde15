use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials submitted to the password login endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct AuthenticateRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

/// Profile fields submitted to the sign-up endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct SignupRequest {
    pub(crate) name: String,
    pub(crate) email: String,
}

/// OTP submission that completes a pending sign-up.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateRequest {
    pub(crate) transaction_id: String,
    pub(crate) otp: String,
}

/// Pending sign-up verification issued by the sign-up endpoint.
///
/// Identified by `transaction_id`; the caller threads it into the OTP
/// validation call. Never mutated once issued. `expiry` is the server-side
/// deadline for the one-time passcode, ISO-8601 on the wire.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtpChallenge {
    pub transaction_id: String,
    pub correlation: String,
    pub expiry: DateTime<Utc>,
}

/// FIDO2 ceremony kind requested from the challenge endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    /// Registration ceremony proving provenance of a newly created key
    Attestation,
    /// Sign-in ceremony proving possession of a registered key
    Assertion,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Attestation => "attestation",
            ChallengeType::Assertion => "assertion",
        }
    }
}

/// Body of a challenge request. The ceremony kind is fixed by the client
/// operation, never passed by the caller; `displayName` is omitted entirely
/// when absent.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChallengeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) display_name: Option<String>,
    #[serde(rename = "type")]
    pub(crate) type_: ChallengeType,
}

/// Attestation ceremony result submitted to the register endpoint.
///
/// Every binary field is base64url-encoded before it is placed here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fido2Registration {
    pub nickname: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub attestation_object: String,
    pub credential_id: String,
}

/// Assertion ceremony result submitted to the signin endpoint.
///
/// Every binary field is base64url-encoded before it is placed here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fido2Verification {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub authenticator_data: String,
    pub credential_id: String,
    pub signature: String,
    pub user_handle: String,
}
