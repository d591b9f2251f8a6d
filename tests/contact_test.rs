//! Contact form submission pipeline: validation, dispatch, and outcome
//! rendering through the real router.

mod helpers;

use axum::http::StatusCode;
use helpers::{app_with_relay, body_string, post_form, test_config};
use kodenox::contact::RelayError;

const VALID_FORM: &[(&str, &str)] = &[
    ("name", "Jane Doe"),
    ("email", "jane@example.com"),
    ("service", "UI/UX Design"),
    ("message", "We need a new marketing site for our product."),
];

#[tokio::test]
async fn test_valid_submission_dispatches_exactly_once() {
    let (app, relay) = app_with_relay(test_config(), None);

    let response = post_form(app, "/contact", VALID_FORM).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-contact-result").unwrap(),
        "success"
    );
    let body = body_string(response).await;
    assert!(body.contains("Message sent successfully!"));
    // toast carries the 5 second display window
    assert!(body.contains("data-dismiss-after=\"5000\""));
    assert_eq!(relay.sent_count(), 1);
}

#[tokio::test]
async fn test_boundary_lengths_pass_validation() {
    // name = 2 chars, message = 10 chars: both meet the minimums
    let (app, relay) = app_with_relay(test_config(), None);

    let response = post_form(
        app,
        "/contact",
        &[
            ("name", "Jo"),
            ("email", "jo@x.com"),
            ("service", "UI/UX Design"),
            ("message", "1234567890"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(relay.sent_count(), 1);
}

#[tokio::test]
async fn test_invalid_submission_reports_all_violations_and_never_dispatches() {
    let (app, relay) = app_with_relay(test_config(), None);

    let response = post_form(
        app,
        "/contact",
        &[
            ("name", "A"),
            ("email", "bad"),
            ("service", ""),
            ("message", "short"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers().get("x-contact-result").unwrap(),
        "invalid"
    );
    let body = body_string(response).await;
    assert!(body.contains("Name must be at least 2 characters"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Please select a service"));
    assert!(body.contains("Message must be at least 10 characters"));
    assert_eq!(relay.sent_count(), 0);
}

#[tokio::test]
async fn test_absent_field_flows_through_inline_errors() {
    let (app, relay) = app_with_relay(test_config(), None);

    // no service key at all, as a browser sends for an untouched select
    let response = post_form(
        app,
        "/contact",
        &[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("message", "We need a new marketing site for our product."),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers().get("x-contact-result").unwrap(),
        "invalid"
    );
    let body = body_string(response).await;
    assert!(body.contains("Please select a service"));
    assert_eq!(relay.sent_count(), 0);
}

#[tokio::test]
async fn test_invalid_submission_preserves_entered_values() {
    let (app, _relay) = app_with_relay(test_config(), None);

    let response = post_form(
        app,
        "/contact",
        &[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("service", "UI/UX Design"),
            ("message", "short"),
        ],
    )
    .await;

    let body = body_string(response).await;
    assert!(body.contains("value=\"Jane Doe\""));
    assert!(body.contains("value=\"jane@example.com\""));
}

#[tokio::test]
async fn test_authentication_rejection_shows_specific_message() {
    let (app, relay) = app_with_relay(test_config(), Some(RelayError::Unauthorized));

    let response = post_form(app, "/contact", VALID_FORM).await;

    assert_eq!(
        response.headers().get("x-contact-result").unwrap(),
        "error"
    );
    let body = body_string(response).await;
    assert!(body.contains("Unauthorized. Check your EmailJS public key."));
    assert!(!body.contains("Failed to send message. Please try again."));
    assert_eq!(relay.sent_count(), 1);
}

#[tokio::test]
async fn test_quota_exhaustion_shows_limit_message() {
    let (app, _relay) = app_with_relay(test_config(), Some(RelayError::QuotaExceeded));

    let response = post_form(app, "/contact", VALID_FORM).await;

    let body = body_string(response).await;
    assert!(body.contains("Forbidden. Email service limit reached."));
}

#[tokio::test]
async fn test_transport_failure_shows_generic_retry_message() {
    let (app, _relay) = app_with_relay(
        test_config(),
        Some(RelayError::Transport("connection reset".to_string())),
    );

    let response = post_form(app, "/contact", VALID_FORM).await;

    let body = body_string(response).await;
    assert!(body.contains("Failed to send message. Please try again."));
}

#[tokio::test]
async fn test_missing_relay_config_reports_without_dispatching() {
    let mut config = test_config();
    config.relay.service_id = String::new();
    let (app, relay) = app_with_relay(config, None);

    let response = post_form(app, "/contact", VALID_FORM).await;

    assert_eq!(
        response.headers().get("x-contact-result").unwrap(),
        "error"
    );
    let body = body_string(response).await;
    assert!(body.contains("Email service is not configured"));
    assert_eq!(relay.sent_count(), 0);
}
