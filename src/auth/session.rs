//! Session cookie handling for page handlers.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, SET_COOKIE},
};
use tracing::error;

use super::codec::SessionCodec;

pub const SESSION_COOKIE_NAME: &str = "session";
const CLEARED_SESSION_COOKIE: &str = "session=; Path=/; Max-Age=0";

/// Username carried by the request's session cookie, or an empty string.
///
/// A missing cookie, a cookie that fails verification and a session for an
/// empty name all come back as `""`.
#[must_use]
pub fn current_user(headers: &HeaderMap, codec: &SessionCodec) -> String {
    extract_session_cookie(headers).map_or_else(String::new, |token| codec.decode(&token))
}

/// Attach `session=<token>; Path=/` for `name`. Encoding failures leave the
/// response without a cookie.
pub fn issue_session(codec: &SessionCodec, name: &str, headers: &mut HeaderMap) {
    let token = match codec.encode(name) {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to encode session: {err}");
            return;
        }
    };

    match HeaderValue::from_str(&format!("{SESSION_COOKIE_NAME}={token}; Path=/")) {
        Ok(cookie) => {
            headers.append(SET_COOKIE, cookie);
        }
        Err(err) => error!("Failed to build session cookie: {err}"),
    }
}

/// Attach an already-expired, empty session cookie.
pub fn clear_session(headers: &mut HeaderMap) {
    headers.append(SET_COOKIE, HeaderValue::from_static(CLEARED_SESSION_COOKIE));
}

fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, val) = pair.trim().split_once('=')?;
            (key.trim() == SESSION_COOKIE_NAME).then(|| val.trim().to_string())
        })
}
