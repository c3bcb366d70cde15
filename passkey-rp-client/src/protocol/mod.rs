mod types;

pub use types::{ChallengeType, Fido2Registration, Fido2Verification, OtpChallenge};

pub(crate) use types::{AuthenticateRequest, ChallengeRequest, SignupRequest, ValidateRequest};
