use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TOKEN_TYPE;

/// Bearer-token session artifact issued by `authenticate`, `validate` and
/// token-variant sign-in.
///
/// Wire casing is snake_case (`access_token`, `token_type`, `expires_in`,
/// `id_token`). The token itself is opaque; this client never inspects or
/// refreshes it, callers thread it back into authenticated operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInfo {
    /// Opaque access token string
    pub access_token: String,
    /// Token-type label, `"Bearer"` when the server omits it
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime of the token in seconds
    pub expires_in: u64,
    /// Optional identity artifact (e.g. an OIDC id token)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

impl TokenInfo {
    /// Value for the `Authorization` request header: `"<type> <token>"`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

/// Cookie-based session artifact assembled from `Set-Cookie` response
/// headers, mapping cookie name to value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookieSet {
    pub items: HashMap<String, String>,
}

impl CookieSet {
    /// Look up a cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
