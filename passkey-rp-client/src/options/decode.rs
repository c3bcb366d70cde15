use serde::Deserialize;
use serde_json::Value;

use crate::utils::base64url_decode;

use super::errors::DecodeError;
use super::types::{
    AuthenticationOptions, AuthenticatorSelection, CredentialDescriptor, PubKeyCredParam,
    RegistrationOptions, RelyingParty, UserEntity,
};

/// Wire shape of a registration-options challenge payload.
///
/// Every field is optional here so that missing required fields surface as
/// [`DecodeError::MissingField`] naming the field, instead of an opaque serde
/// message.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationOptionsResponse {
    challenge: Option<String>,
    timeout: Option<u32>,
    rp: Option<RelyingPartyEntry>,
    user: Option<UserEntry>,
    exclude_credentials: Option<Vec<CredentialDescriptorEntry>>,
    authenticator_selection: Option<AuthenticatorSelectionEntry>,
    pub_key_cred_params: Option<Vec<PubKeyCredParamEntry>>,
    attestation: Option<String>,
    extensions: Option<Value>,
}

#[derive(Deserialize, Debug)]
struct RelyingPartyEntry {
    id: Option<String>,
    name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UserEntry {
    id: Option<String>,
    name: Option<String>,
    display_name: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CredentialDescriptorEntry {
    id: String,
    #[serde(rename = "type")]
    type_: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AuthenticatorSelectionEntry {
    authenticator_attachment: Option<String>,
    resident_key: Option<String>,
    require_resident_key: Option<bool>,
    user_verification: Option<String>,
}

#[derive(Deserialize, Debug)]
struct PubKeyCredParamEntry {
    alg: i32,
    #[serde(rename = "type")]
    type_: String,
}

/// Wire shape of an assertion-options challenge payload.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticationOptionsResponse {
    challenge: Option<String>,
    timeout: Option<u32>,
    rp_id: Option<String>,
    allow_credentials: Option<Vec<CredentialDescriptorEntry>>,
    user_verification: Option<String>,
    extensions: Option<Value>,
}

fn decode_bytes_field(field: &'static str, value: Option<String>) -> Result<Vec<u8>, DecodeError> {
    let encoded = value.ok_or(DecodeError::MissingField(field))?;
    base64url_decode(&encoded).map_err(|_| DecodeError::Base64 { field })
}

impl From<CredentialDescriptorEntry> for CredentialDescriptor {
    fn from(entry: CredentialDescriptorEntry) -> Self {
        Self {
            id: entry.id,
            type_: entry.type_,
        }
    }
}

impl TryFrom<RegistrationOptionsResponse> for RegistrationOptions {
    type Error = DecodeError;

    fn try_from(response: RegistrationOptionsResponse) -> Result<Self, Self::Error> {
        let challenge = decode_bytes_field("challenge", response.challenge)?;

        let rp_entry = response.rp.ok_or(DecodeError::MissingField("rp"))?;
        let user_entry = response.user.ok_or(DecodeError::MissingField("user"))?;
        let user_id = decode_bytes_field("user.id", user_entry.id)?;
        let params = response
            .pub_key_cred_params
            .ok_or(DecodeError::MissingField("pubKeyCredParams"))?;

        // Each selection field is defaulted independently of the others.
        let defaults = AuthenticatorSelection::default();
        let authenticator_selection = match response.authenticator_selection {
            Some(entry) => AuthenticatorSelection {
                authenticator_attachment: entry
                    .authenticator_attachment
                    .unwrap_or(defaults.authenticator_attachment),
                resident_key: entry.resident_key.unwrap_or(defaults.resident_key),
                require_resident_key: entry
                    .require_resident_key
                    .unwrap_or(defaults.require_resident_key),
                user_verification: entry.user_verification.unwrap_or(defaults.user_verification),
            },
            None => defaults,
        };

        Ok(Self {
            challenge,
            timeout: response.timeout,
            rp: RelyingParty {
                id: rp_entry.id,
                name: rp_entry.name,
            },
            user: UserEntity {
                id: user_id,
                name: user_entry.name,
                display_name: user_entry.display_name,
            },
            exclude_credentials: response
                .exclude_credentials
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            authenticator_selection,
            pub_key_cred_params: params
                .into_iter()
                .map(|entry| PubKeyCredParam {
                    alg: entry.alg,
                    type_: entry.type_,
                })
                .collect(),
            attestation: response.attestation,
            extensions: response.extensions,
        })
    }
}

impl TryFrom<AuthenticationOptionsResponse> for AuthenticationOptions {
    type Error = DecodeError;

    fn try_from(response: AuthenticationOptionsResponse) -> Result<Self, Self::Error> {
        let challenge = decode_bytes_field("challenge", response.challenge)?;

        Ok(Self {
            challenge,
            timeout: response.timeout,
            rp_id: response.rp_id,
            allow_credentials: response
                .allow_credentials
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            user_verification: response.user_verification,
            extensions: response.extensions,
        })
    }
}

pub(crate) fn decode_registration_options(body: &str) -> Result<RegistrationOptions, DecodeError> {
    let response: RegistrationOptionsResponse = serde_json::from_str(body)?;
    response.try_into()
}

pub(crate) fn decode_authentication_options(
    body: &str,
) -> Result<AuthenticationOptions, DecodeError> {
    let response: AuthenticationOptionsResponse = serde_json::from_str(body)?;
    response.try_into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registration_payload() -> Value {
        json!({
            "challenge": "abc-_12",
            "timeout": 60000,
            "rp": {"id": "example.com", "name": "Example"},
            "user": {
                "id": "dXNlci1pZA",
                "name": "alice@example.com",
                "displayName": "Alice"
            },
            "excludeCredentials": [
                {"id": "Y3JlZC0x", "type": "public-key"}
            ],
            "authenticatorSelection": {
                "authenticatorAttachment": "cross-platform",
                "residentKey": "preferred",
                "requireResidentKey": false,
                "userVerification": "discouraged"
            },
            "pubKeyCredParams": [
                {"alg": -7, "type": "public-key"},
                {"alg": -257, "type": "public-key"}
            ],
            "attestation": "none"
        })
    }

    /// Test decoding of a complete registration-options payload, including
    /// binary-field decoding of challenge and user.id
    #[test]
    fn test_decode_registration_options_full() {
        let options = decode_registration_options(&registration_payload().to_string()).unwrap();

        assert_eq!(options.challenge, vec![0x69, 0xB7, 0x3E, 0xFF, 0x5D]);
        assert_eq!(options.timeout, Some(60000));
        assert_eq!(options.rp.id.as_deref(), Some("example.com"));
        assert_eq!(options.rp.name.as_deref(), Some("Example"));
        assert_eq!(options.user.id, b"user-id");
        assert_eq!(options.user.name.as_deref(), Some("alice@example.com"));
        assert_eq!(options.user.display_name.as_deref(), Some("Alice"));
        assert_eq!(options.exclude_credentials.len(), 1);
        assert_eq!(options.exclude_credentials[0].id, "Y3JlZC0x");
        assert_eq!(options.exclude_credentials[0].type_, "public-key");
        assert_eq!(
            options.authenticator_selection.authenticator_attachment,
            "cross-platform"
        );
        assert_eq!(options.authenticator_selection.resident_key, "preferred");
        assert!(!options.authenticator_selection.require_resident_key);
        assert_eq!(
            options.authenticator_selection.user_verification,
            "discouraged"
        );
        assert_eq!(options.pub_key_cred_params.len(), 2);
        assert_eq!(options.pub_key_cred_params[0].alg, -7);
        assert_eq!(options.attestation.as_deref(), Some("none"));
    }

    /// Test that a payload lacking authenticatorSelection entirely yields all
    /// four documented defaults
    #[test]
    fn test_decode_registration_options_selection_defaults() {
        let mut payload = registration_payload();
        payload.as_object_mut().unwrap().remove("authenticatorSelection");

        let options = decode_registration_options(&payload.to_string()).unwrap();
        let selection = options.authenticator_selection;
        assert_eq!(selection.authenticator_attachment, "platform");
        assert_eq!(selection.resident_key, "required");
        assert!(selection.require_resident_key);
        assert_eq!(selection.user_verification, "required");
    }

    /// Test that each missing selection field is defaulted independently of
    /// the fields the server did send
    #[test]
    fn test_decode_registration_options_partial_selection() {
        let mut payload = registration_payload();
        payload["authenticatorSelection"] = json!({"residentKey": "preferred"});

        let options = decode_registration_options(&payload.to_string()).unwrap();
        let selection = options.authenticator_selection;
        assert_eq!(selection.authenticator_attachment, "platform");
        assert_eq!(selection.resident_key, "preferred");
        assert!(selection.require_resident_key);
        assert_eq!(selection.user_verification, "required");
    }

    /// Test that an absent excludeCredentials decodes to an empty list
    #[test]
    fn test_decode_registration_options_no_exclude_credentials() {
        let mut payload = registration_payload();
        payload.as_object_mut().unwrap().remove("excludeCredentials");

        let options = decode_registration_options(&payload.to_string()).unwrap();
        assert!(options.exclude_credentials.is_empty());
    }

    /// Test that decoding the same payload twice yields identical results
    #[test]
    fn test_decode_registration_options_idempotent() {
        let mut payload = registration_payload();
        payload.as_object_mut().unwrap().remove("authenticatorSelection");
        let body = payload.to_string();

        let first = decode_registration_options(&body).unwrap();
        let second = decode_registration_options(&body).unwrap();
        assert_eq!(first, second);
    }

    /// Test that each missing required field is reported by name
    #[test]
    fn test_decode_registration_options_missing_required_fields() {
        for (field, expected) in [
            ("challenge", "challenge"),
            ("rp", "rp"),
            ("user", "user"),
            ("pubKeyCredParams", "pubKeyCredParams"),
        ] {
            let mut payload = registration_payload();
            payload.as_object_mut().unwrap().remove(field);

            let result = decode_registration_options(&payload.to_string());
            match result {
                Err(DecodeError::MissingField(name)) => assert_eq!(name, expected),
                other => panic!("Expected MissingField({expected}), got {other:?}"),
            }
        }
    }

    /// Test that a missing user.id is reported with its dotted path
    #[test]
    fn test_decode_registration_options_missing_user_id() {
        let mut payload = registration_payload();
        payload["user"] = json!({"name": "alice@example.com"});

        let result = decode_registration_options(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MissingField("user.id"))));
    }

    /// Test that malformed base64url in the challenge is a Base64 error
    /// naming the field
    #[test]
    fn test_decode_registration_options_malformed_challenge() {
        let mut payload = registration_payload();
        payload["challenge"] = json!("not base64url!!!");

        let result = decode_registration_options(&payload.to_string());
        match result {
            Err(DecodeError::Base64 { field }) => assert_eq!(field, "challenge"),
            other => panic!("Expected Base64 error, got {other:?}"),
        }
    }

    /// Test decoding of an assertion-options payload; the type carries no
    /// rp/user/pubKeyCredParams fields at all
    #[test]
    fn test_decode_authentication_options() {
        let payload = json!({
            "challenge": "abc-_12",
            "timeout": 30000,
            "rpId": "example.com",
            "allowCredentials": [
                {"id": "Y3JlZC0x", "type": "public-key"}
            ],
            "userVerification": "preferred"
        });

        let options = decode_authentication_options(&payload.to_string()).unwrap();
        assert_eq!(options.challenge, vec![0x69, 0xB7, 0x3E, 0xFF, 0x5D]);
        assert_eq!(options.timeout, Some(30000));
        assert_eq!(options.rp_id.as_deref(), Some("example.com"));
        assert_eq!(options.allow_credentials.len(), 1);
        assert_eq!(options.user_verification.as_deref(), Some("preferred"));
    }

    /// Test that a minimal assertion payload decodes with an empty allow list
    #[test]
    fn test_decode_authentication_options_minimal() {
        let payload = json!({"challenge": "abc-_12"});

        let options = decode_authentication_options(&payload.to_string()).unwrap();
        assert_eq!(options.challenge, vec![0x69, 0xB7, 0x3E, 0xFF, 0x5D]);
        assert!(options.allow_credentials.is_empty());
        assert_eq!(options.rp_id, None);
        assert_eq!(options.user_verification, None);
    }

    /// Test that an assertion payload without a challenge is rejected
    #[test]
    fn test_decode_authentication_options_missing_challenge() {
        let payload = json!({"rpId": "example.com"});

        let result = decode_authentication_options(&payload.to_string());
        assert!(matches!(
            result,
            Err(DecodeError::MissingField("challenge"))
        ));
    }

    /// Test that a body that is not JSON at all surfaces as a Json error
    #[test]
    fn test_decode_invalid_json() {
        let result = decode_registration_options("not valid json");
        assert!(matches!(result, Err(DecodeError::Json(_))));

        let result = decode_authentication_options("not valid json");
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }
}
