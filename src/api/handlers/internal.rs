use super::{escape_html, found};
use crate::auth::{AuthState, current_user};
use axum::{
    Extension,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

fn internal_page(username: &str) -> String {
    format!(
        r#"
<h1>Internal</h1>
<hr>
<small>You're welcome {}</small>
<form method="post" action="/logout">
    <button type="submit">Logout</button>
</form>
"#,
        escape_html(username)
    )
}

// axum handler for the protected page
pub async fn internal(headers: HeaderMap, auth_state: Extension<Arc<AuthState>>) -> Response {
    let username = current_user(&headers, auth_state.codec());
    if username.is_empty() {
        debug!("No valid session, redirecting to login");
        return found("/", HeaderMap::new());
    }

    Html(internal_page(&username)).into_response()
}
