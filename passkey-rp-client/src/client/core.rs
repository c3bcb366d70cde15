use std::time::Duration;

use http::HeaderMap;
use http::header::AUTHORIZATION;
use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{
    AUTHENTICATE_PATH, CHALLENGE_PATH, REGISTER_PATH, SIGNIN_PATH, SIGNUP_PATH, VALIDATE_PATH,
};
use crate::options::{
    AuthenticationOptions, RegistrationOptions, decode_authentication_options,
    decode_registration_options,
};
use crate::protocol::{
    AuthenticateRequest, ChallengeRequest, ChallengeType, Fido2Registration, Fido2Verification,
    OtpChallenge, SignupRequest, ValidateRequest,
};
use crate::session::{CookieSet, TokenInfo, cookies_from_headers};
use crate::utils::base64url_encode;

use super::errors::ClientError;

/// Authorization material for the register submission: either a bearer
/// session or the raw headers of a cookie-based session.
#[derive(Debug)]
pub enum RegistrationAuth<'a> {
    Bearer(&'a TokenInfo),
    Headers(HeaderMap),
}

/// Client for the relying-party ceremony endpoints.
///
/// Holds only the base server address and the HTTP transport. Every operation
/// is an independent request/response exchange: one round trip, then a
/// synchronous decode. No state is carried between calls except what the
/// caller threads through explicitly (session artifacts, transaction ids), so
/// a single instance is safe to share across tasks. Dropping an operation's
/// future aborts the outstanding request.
#[derive(Debug, Clone)]
pub struct RelyingPartyClient {
    base_url: Url,
    http: reqwest::Client,
}

impl RelyingPartyClient {
    /// Create a client for the given base address with a default pooled
    /// transport.
    ///
    /// - `pool_idle_timeout`: 90 seconds, how long an idle connection stays
    ///   in the pool before being dropped.
    /// - `pool_max_idle_per_host`: 32, enough for parallel ceremony calls
    ///   while staying memory efficient.
    ///
    /// No per-request timeout is set; impose one through
    /// [`RelyingPartyClient::with_http_client`] or per call site.
    pub fn new(base_url: Url) -> Self {
        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(32)
            .build()
            .expect("Failed to create reqwest client");
        Self::with_http_client(base_url, http)
    }

    /// Create a client that uses a caller-configured transport, e.g. one with
    /// custom timeouts or a test double behind a local listener.
    pub fn with_http_client(base_url: Url, http: reqwest::Client) -> Self {
        Self { base_url, http }
    }

    /// Exchange username/password credentials for a bearer-token session.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenInfo, ClientError> {
        let request = AuthenticateRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.post_json(AUTHENTICATE_PATH, &request, None, None).await?;
        let response = Self::ensure_success(response).await?;
        Self::decode_body(response).await
    }

    /// Start account enrollment. Returns the pending OTP verification the
    /// caller completes with [`RelyingPartyClient::validate`].
    pub async fn signup(&self, name: &str, email: &str) -> Result<OtpChallenge, ClientError> {
        let request = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
        };
        let response = self.post_json(SIGNUP_PATH, &request, None, None).await?;
        let response = Self::ensure_success(response).await?;
        Self::decode_body(response).await
    }

    /// Complete a pending sign-up by submitting the one-time passcode.
    ///
    /// A wrong or expired passcode is a server-side rejection and surfaces as
    /// [`ClientError::Protocol`].
    pub async fn validate(
        &self,
        transaction_id: &str,
        otp: &str,
    ) -> Result<TokenInfo, ClientError> {
        let request = ValidateRequest {
            transaction_id: transaction_id.to_string(),
            otp: otp.to_string(),
        };
        let response = self.post_json(VALIDATE_PATH, &request, None, None).await?;
        let response = Self::ensure_success(response).await?;
        Self::decode_body(response).await
    }

    /// Request a registration (attestation) challenge and decode it into
    /// [`RegistrationOptions`].
    ///
    /// The decoded challenge bytes must go straight to the platform
    /// authenticator; the server expires them and they must not be cached or
    /// reused. A missing `display_name` is not validated locally, the server
    /// rejects it where required.
    pub async fn challenge_for_registration(
        &self,
        display_name: Option<&str>,
        session: Option<&TokenInfo>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<RegistrationOptions, ClientError> {
        let body = self
            .challenge(ChallengeType::Attestation, display_name, session, extra_headers)
            .await?;
        decode_registration_options(&body).map_err(ClientError::Decode)
    }

    /// Request an assertion challenge and decode it into
    /// [`AuthenticationOptions`].
    pub async fn challenge_for_assertion(
        &self,
        display_name: Option<&str>,
        session: Option<&TokenInfo>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<AuthenticationOptions, ClientError> {
        let body = self
            .challenge(ChallengeType::Assertion, display_name, session, extra_headers)
            .await?;
        decode_authentication_options(&body).map_err(ClientError::Decode)
    }

    /// Submit the attestation ceremony result produced by the platform
    /// authenticator.
    ///
    /// Binary inputs are re-encoded to base64url at this boundary. The
    /// submission is not idempotent: resubmitting after a prior success is a
    /// server-defined error.
    pub async fn register(
        &self,
        nickname: &str,
        client_data_json: &[u8],
        attestation_object: &[u8],
        credential_id: &[u8],
        auth: RegistrationAuth<'_>,
    ) -> Result<(), ClientError> {
        let request = Fido2Registration {
            nickname: nickname.to_string(),
            client_data_json: base64url_encode(client_data_json),
            attestation_object: base64url_encode(attestation_object),
            credential_id: base64url_encode(credential_id),
        };
        let (session, extra_headers) = match auth {
            RegistrationAuth::Bearer(token) => (Some(token), None),
            RegistrationAuth::Headers(headers) => (None, Some(headers)),
        };
        let response = self
            .post_json(REGISTER_PATH, &request, session, extra_headers)
            .await?;
        Self::ensure_success(response).await?;
        tracing::debug!("Registered credential nickname={nickname}");
        Ok(())
    }

    /// Submit the assertion ceremony result and decode a bearer-token
    /// session from the response body.
    pub async fn signin_expecting_token(
        &self,
        signature: &[u8],
        client_data_json: &[u8],
        authenticator_data: &[u8],
        credential_id: &[u8],
        user_id: &[u8],
    ) -> Result<TokenInfo, ClientError> {
        let request = Self::verification_request(
            signature,
            client_data_json,
            authenticator_data,
            credential_id,
            user_id,
        );
        let response = self.post_json(SIGNIN_PATH, &request, None, None).await?;
        let response = Self::ensure_success(response).await?;
        Self::decode_body(response).await
    }

    /// Submit the assertion ceremony result and assemble a cookie session
    /// from the `Set-Cookie` response headers.
    ///
    /// This is the only operation that reads response headers; every other
    /// operation decodes the raw body.
    pub async fn signin_expecting_cookies(
        &self,
        signature: &[u8],
        client_data_json: &[u8],
        authenticator_data: &[u8],
        credential_id: &[u8],
        user_id: &[u8],
    ) -> Result<CookieSet, ClientError> {
        let request = Self::verification_request(
            signature,
            client_data_json,
            authenticator_data,
            credential_id,
            user_id,
        );
        let response = self.post_json(SIGNIN_PATH, &request, None, None).await?;
        let response = Self::ensure_success(response).await?;
        let cookies = cookies_from_headers(response.headers());
        tracing::debug!("Sign-in produced {} session cookie(s)", cookies.items.len());
        Ok(cookies)
    }

    async fn challenge(
        &self,
        type_: ChallengeType,
        display_name: Option<&str>,
        session: Option<&TokenInfo>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<String, ClientError> {
        let request = ChallengeRequest {
            display_name: display_name.map(str::to_string),
            type_,
        };
        let response = self
            .post_json(CHALLENGE_PATH, &request, session, extra_headers)
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    fn verification_request(
        signature: &[u8],
        client_data_json: &[u8],
        authenticator_data: &[u8],
        credential_id: &[u8],
        user_id: &[u8],
    ) -> Fido2Verification {
        Fido2Verification {
            client_data_json: base64url_encode(client_data_json),
            authenticator_data: base64url_encode(authenticator_data),
            credential_id: base64url_encode(credential_id),
            signature: base64url_encode(signature),
            user_handle: base64url_encode(user_id),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        session: Option<&TokenInfo>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Response, ClientError> {
        let url = self.endpoint(path);
        tracing::debug!("POST {url}");
        let mut request = self.http.post(url).json(body);
        if let Some(session) = session {
            request = request.header(AUTHORIZATION, session.authorization_header());
        }
        if let Some(headers) = extra_headers {
            request = request.headers(headers);
        }
        Ok(request.send().await?)
    }

    /// Treat any status outside 200-299 as failure, surfacing the raw body.
    async fn ensure_success(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        tracing::debug!("Request failed with {status}: {body}");
        Err(ClientError::Protocol { status, body })
    }

    async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.into()))
    }
}
