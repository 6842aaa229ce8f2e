//! Page handlers for the login flow.
//!
//! Every transition answers with a `302 Found` redirect except a failed
//! login, which renders an inline notice with `200 OK`.

pub mod health;
pub mod index;
pub mod internal;
pub mod login;
pub mod logout;

pub use self::health::health;
pub use self::index::index;
pub use self::internal::internal;
pub use self::login::login;
pub use self::logout::logout;

use axum::{
    http::{HeaderMap, HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

/// `302 Found` to `location`, keeping any headers already collected.
pub(crate) fn found(location: &'static str, mut headers: HeaderMap) -> Response {
    headers.insert(LOCATION, HeaderValue::from_static(location));
    (StatusCode::FOUND, headers).into_response()
}

/// Minimal HTML escaping for text interpolated into pages.
pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
