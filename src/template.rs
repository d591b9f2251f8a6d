use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Render a template into a response, degrading to a plain 500 when the
/// template itself fails.
pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong, please retry later",
            )
                .into_response()
        }
    }
}

/// Header the browser script reads to decide how to apply a contact-form
/// response: swap the form (invalid), reset it (success), or leave it alone
/// (relay failure).
pub const CONTACT_RESULT_HEADER: &str = "x-contact-result";

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
    pub dismiss_after_ms: u64,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}
