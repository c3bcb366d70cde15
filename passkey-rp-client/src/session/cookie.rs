use http::HeaderMap;
use http::header::SET_COOKIE;

use super::types::CookieSet;

/// Extract cookie name/value pairs from every `Set-Cookie` response header.
///
/// Only the leading `name=value` pair of each header is kept; attributes
/// after the first `;` (Path, Max-Age, HttpOnly, ...) are dropped. Headers
/// without a `=` pair are skipped.
pub(crate) fn cookies_from_headers(headers: &HeaderMap) -> CookieSet {
    let mut cookies = CookieSet::default();
    for header_value in headers.get_all(SET_COOKIE) {
        let Ok(raw) = header_value.to_str() else {
            tracing::debug!("Skipping non-UTF-8 Set-Cookie header");
            continue;
        };
        let pair = raw.split(';').next().unwrap_or_default();
        if let Some((name, value)) = pair.split_once('=') {
            cookies
                .items
                .insert(name.trim().to_string(), value.trim().to_string());
        }
    }
    cookies
}
