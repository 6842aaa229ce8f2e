use super::found;
use crate::auth::clear_session;
use axum::{http::HeaderMap, response::Response};

// axum handler for logout; always clears the cookie
pub async fn logout() -> Response {
    let mut headers = HeaderMap::new();
    clear_session(&mut headers);
    found("/", headers)
}
