use super::found;
use crate::auth::{AuthState, issue_session};
use axum::{
    Extension, Form,
    extract::rejection::FormRejection,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

pub(crate) const INVALID_LOGIN_PAGE: &str = r#"<h1>Invalid login</h1><a href="/">Try again</a>"#;

#[derive(Deserialize, Default)]
pub struct LoginForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    password: String,
}

// axum handler for login
pub async fn login(
    auth_state: Extension<Arc<AuthState>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    // Unreadable bodies behave like empty fields.
    let LoginForm { name, password } = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Login form rejected: {rejection}");
            LoginForm::default()
        }
    };

    if !auth_state.verifier().verify(&name, &password).await {
        info!(username = %name, "Invalid login");
        return (StatusCode::OK, Html(INVALID_LOGIN_PAGE)).into_response();
    }

    info!(username = %name, "Login succeeded");

    let mut headers = HeaderMap::new();
    issue_session(auth_state.codec(), &name, &mut headers);
    found("/internal", headers)
}
