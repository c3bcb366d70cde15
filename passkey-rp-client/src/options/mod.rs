mod decode;
mod errors;
mod types;

pub use errors::DecodeError;
pub use types::{
    AuthenticationOptions, AuthenticatorSelection, CredentialDescriptor, PubKeyCredParam,
    RegistrationOptions, RelyingParty, UserEntity,
};

pub(crate) use decode::{decode_authentication_options, decode_registration_options};
