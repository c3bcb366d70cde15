//! passkey-rp-client - Relying-party protocol client for passkey ceremonies
//!
//! This crate is a client-side orchestrator for a passwordless-authentication
//! ceremony built on WebAuthn/FIDO2 passkeys, paired with a password+OTP
//! enrollment flow. It mediates between a relying-party REST backend and a
//! platform authenticator: it requests challenges, decodes the server's
//! credential options (including WebAuthn's unpadded base64url encoding of
//! binary fields) into the structures the authenticator expects, and submits
//! the authenticator's binary results back to the server.
//!
//! The platform authenticator itself is an external collaborator. A typical
//! registration flow:
//!
//! 1. [`RelyingPartyClient::authenticate`] or
//!    [`RelyingPartyClient::signup`] + [`RelyingPartyClient::validate`]
//!    produce a [`TokenInfo`] session.
//! 2. [`RelyingPartyClient::challenge_for_registration`] fetches and decodes
//!    [`RegistrationOptions`]; the caller hands the raw challenge bytes to
//!    the authenticator.
//! 3. [`RelyingPartyClient::register`] submits the attestation result.
//!
//! Sign-in mirrors this with [`RelyingPartyClient::challenge_for_assertion`]
//! followed by [`RelyingPartyClient::signin_expecting_token`] or
//! [`RelyingPartyClient::signin_expecting_cookies`].
//!
//! The client performs no cryptographic verification and stores nothing;
//! every operation is a single request/response exchange whose errors
//! surface directly as [`ClientError`].

mod client;
mod config;
mod options;
mod protocol;
mod session;
mod utils;

pub use client::{ClientError, RegistrationAuth, RelyingPartyClient};

pub use options::{
    AuthenticationOptions, AuthenticatorSelection, CredentialDescriptor, DecodeError,
    PubKeyCredParam, RegistrationOptions, RelyingParty, UserEntity,
};

pub use protocol::{ChallengeType, Fido2Registration, Fido2Verification, OtpChallenge};

pub use session::{CookieSet, TokenInfo};

pub use utils::{UtilError, base64url_decode, base64url_encode};
