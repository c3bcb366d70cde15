use serde_json::Value;

/// Relying-party identity echoed in registration options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelyingParty {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// User account entity carried in registration options.
///
/// `id` holds the raw bytes the server issued; it is handed to the
/// authenticator as-is and re-encoded only at the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: Vec<u8>,
    pub name: Option<String>,
    pub display_name: Option<String>,
}

/// Reference to an existing credential in an exclude or allow list.
///
/// The `id` stays in its base64url wire form; it is matched by the
/// authenticator, never decoded locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialDescriptor {
    pub id: String,
    pub type_: String,
}

/// Authenticator-selection criteria with client-side defaults applied.
///
/// Each field defaults independently when the server omits it:
/// `authenticatorAttachment = "platform"`, `residentKey = "required"`,
/// `requireResidentKey = true`, `userVerification = "required"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatorSelection {
    pub authenticator_attachment: String,
    pub resident_key: String,
    pub require_resident_key: bool,
    pub user_verification: String,
}

impl Default for AuthenticatorSelection {
    fn default() -> Self {
        Self {
            authenticator_attachment: "platform".to_string(),
            resident_key: "required".to_string(),
            require_resident_key: true,
            user_verification: "required".to_string(),
        }
    }
}

/// Signature algorithm accepted for a new credential (COSE identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubKeyCredParam {
    pub alg: i32,
    pub type_: String,
}

/// Decoded options for a registration (attestation) ceremony.
///
/// The challenge and user id arrive from the server as base64url strings and
/// are decoded to raw bytes at construction time; the caller hands them to
/// the platform authenticator unchanged. Challenges have a server-defined
/// expiry and must not be cached or reused.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOptions {
    pub challenge: Vec<u8>,
    pub timeout: Option<u32>,
    pub rp: RelyingParty,
    pub user: UserEntity,
    pub exclude_credentials: Vec<CredentialDescriptor>,
    pub authenticator_selection: AuthenticatorSelection,
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    pub attestation: Option<String>,
    pub extensions: Option<Value>,
}

/// Decoded options for an authentication (assertion) ceremony.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationOptions {
    pub challenge: Vec<u8>,
    pub timeout: Option<u32>,
    pub rp_id: Option<String>,
    pub allow_credentials: Vec<CredentialDescriptor>,
    pub user_verification: Option<String>,
    pub extensions: Option<Value>,
}
