use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use strum::VariantArray;

use crate::contact::{state, ContactSubmission, FormErrors, ServiceKind, SubmissionState};
use crate::routes::AppState;
use crate::template::{render, ToastErrorTemplate, ToastSuccessTemplate, CONTACT_RESULT_HEADER};

#[derive(Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub service_options: Vec<String>,
    pub values: ContactSubmission,
    pub errors: FormErrors,
}

fn service_options() -> Vec<String> {
    ServiceKind::VARIANTS.iter().map(|s| s.to_string()).collect()
}

/// POST /contact - Validate the submission and dispatch it to the relay.
///
/// Invalid input re-renders the form fragment with inline messages and never
/// reaches the relay. A valid submission is dispatched exactly once; the
/// response is a toast fragment, success or failure, and the result header
/// tells the browser script whether to reset the form.
pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> impl IntoResponse {
    let submission = match input.clone().validated() {
        Ok(submission) => submission,
        Err(errors) => {
            let form = ContactFormTemplate {
                service_options: service_options(),
                values: input,
                errors,
            };
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                [(CONTACT_RESULT_HEADER, "invalid")],
                render(form),
            )
                .into_response();
        }
    };

    let mut submission_state = SubmissionState::default();
    if !submission_state.submit() {
        // unreachable with a per-request state, but the guard is the contract
        return StatusCode::CONFLICT.into_response();
    }

    submission_state.resolve(app_state.relay.send(&submission).await);

    match submission_state {
        SubmissionState::Succeeded => (
            [(CONTACT_RESULT_HEADER, "success")],
            render(ToastSuccessTemplate {
                message: "Message sent successfully!",
                description: Some("Thank you for contacting us. We'll get back to you within 24 hours."),
                dismiss_after_ms: state::success_display_ms(),
            }),
        )
            .into_response(),
        SubmissionState::Failed(err) => (
            [(CONTACT_RESULT_HEADER, "error")],
            render(ToastErrorTemplate {
                message: err.user_message(),
                description: None,
            }),
        )
            .into_response(),
        SubmissionState::Idle | SubmissionState::Submitting => {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
