use axum::response::{Html, IntoResponse};

pub(crate) const LOGIN_PAGE: &str = r#"
<h1>Login</h1>
<form method="post" action="/login">
    <label for="name">User name</label>
    <input type="text" id="name" name="name">
    <label for="password">Password</label>
    <input type="password" id="password" name="password">
    <button type="submit">Login</button>
</form>
"#;

// axum handler for the login form
pub async fn index() -> impl IntoResponse {
    Html(LOGIN_PAGE)
}
