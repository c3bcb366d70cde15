mod cookie;
mod types;

pub use types::{CookieSet, TokenInfo};

pub(crate) use cookie::cookies_from_headers;
