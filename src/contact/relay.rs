use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::config::RelayConfig;
use crate::contact::form::ContactSubmission;

/// Display name the relay substitutes into the message template.
pub const RECIPIENT_NAME: &str = "Kodenox Team";

/// Everything that can go wrong between a validated submission and a
/// delivered email. Each kind carries its own user-facing message; none of
/// them is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay configuration is missing: {0}")]
    MissingConfig(&'static str),
    #[error("relay rejected the request: bad request")]
    BadRequest,
    #[error("relay rejected the key: unauthorized")]
    Unauthorized,
    #[error("relay quota exhausted: forbidden")]
    QuotaExceeded,
    #[error("relay precondition failed")]
    PreconditionFailed,
    #[error("relay account lacks required permission scopes")]
    InsufficientScope,
    #[error("transport failure: {0}")]
    Transport(String),
}

impl RelayError {
    /// Message shown in the toast for this failure kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            RelayError::MissingConfig(_) => {
                "Email service is not configured. Please try again later."
            }
            RelayError::BadRequest => "Bad Request. Please check all form fields.",
            RelayError::Unauthorized => "Unauthorized. Check your EmailJS public key.",
            RelayError::QuotaExceeded => "Forbidden. Email service limit reached.",
            RelayError::PreconditionFailed => "Precondition Failed. Check EmailJS configuration.",
            RelayError::InsufficientScope => {
                "Gmail service requires additional permissions. Please contact administrator."
            }
            RelayError::Transport(_) => "Failed to send message. Please try again.",
        }
    }
}

/// Interpret the relay's HTTP response.
///
/// Success is a literal HTTP 200 comparison, matching the relay client's
/// documented convention; the body is never consulted on success. On
/// failure the body is inspected before the status, since the
/// insufficient-scopes case arrives inside the error text rather than as a
/// dedicated status code.
pub fn classify_response(status: StatusCode, body: &str) -> Result<(), RelayError> {
    if status == StatusCode::OK {
        return Ok(());
    }

    if body.contains("insufficient authentication scopes") {
        return Err(RelayError::InsufficientScope);
    }

    Err(match status {
        StatusCode::BAD_REQUEST => RelayError::BadRequest,
        StatusCode::UNAUTHORIZED => RelayError::Unauthorized,
        StatusCode::FORBIDDEN => RelayError::QuotaExceeded,
        StatusCode::PRECONDITION_FAILED => RelayError::PreconditionFailed,
        other => RelayError::Transport(format!("relay returned status {other}")),
    })
}

#[derive(Clone)]
enum Mode {
    Http(reqwest::Client),
    /// Test mode: counts dispatches and returns a scripted outcome instead
    /// of touching the network.
    Mock {
        outcome: Option<RelayError>,
        sent: Arc<AtomicUsize>,
    },
}

/// Client for the hosted transactional-email relay.
#[derive(Clone)]
pub struct RelayClient {
    config: RelayConfig,
    mode: Mode,
}

impl RelayClient {
    /// Create a relay client from configuration.
    ///
    /// The public key identifies the relay account; without it the client
    /// cannot initialize at all. Missing service/template identifiers are
    /// tolerated here and reported per dispatch instead.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        if config.public_key.is_empty() {
            return Err(RelayError::MissingConfig("public_key"));
        }

        Ok(Self {
            config,
            mode: Mode::Http(reqwest::Client::new()),
        })
    }

    /// Create a mock relay client for testing (skips actual HTTP).
    pub fn new_mock(config: RelayConfig, outcome: Option<RelayError>) -> Self {
        Self {
            config,
            mode: Mode::Mock {
                outcome,
                sent: Arc::new(AtomicUsize::new(0)),
            },
        }
    }

    /// Number of dispatches issued by a mock client.
    pub fn sent_count(&self) -> usize {
        match &self.mode {
            Mode::Mock { sent, .. } => sent.load(Ordering::SeqCst),
            Mode::Http(_) => 0,
        }
    }

    /// Send a validated submission to the relay.
    ///
    /// Exactly one network call per invocation. Fails fast with a
    /// configuration error when the service or template identifier is
    /// absent, before any I/O.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        if self.config.service_id.is_empty() {
            error!("Relay service_id is not configured; refusing to dispatch");
            return Err(RelayError::MissingConfig("service_id"));
        }
        if self.config.template_id.is_empty() {
            error!("Relay template_id is not configured; refusing to dispatch");
            return Err(RelayError::MissingConfig("template_id"));
        }

        match &self.mode {
            Mode::Mock { outcome, sent } => {
                sent.fetch_add(1, Ordering::SeqCst);
                match outcome {
                    Some(err) => Err(err.clone()),
                    None => Ok(()),
                }
            }
            Mode::Http(http) => {
                let payload = json!({
                    "service_id": self.config.service_id,
                    "template_id": self.config.template_id,
                    "user_id": self.config.public_key,
                    "template_params": {
                        "name": submission.name,
                        "email": submission.email,
                        "service": submission.service,
                        "message": submission.message,
                        "to_name": RECIPIENT_NAME,
                        "reply_to": submission.email,
                    },
                });

                let response = http
                    .post(&self.config.endpoint)
                    .json(&payload)
                    .send()
                    .await
                    .map_err(|e| {
                        error!(error = %e, "Relay request failed to complete");
                        RelayError::Transport(e.to_string())
                    })?;

                let status = response.status();
                let body = response.text().await.unwrap_or_default();

                match classify_response(status, &body) {
                    Ok(()) => {
                        info!(from = %submission.email, "Contact submission relayed");
                        Ok(())
                    }
                    Err(err) => {
                        error!(%status, error = %err, "Relay rejected contact submission");
                        Err(err)
                    }
                }
            }
        }
    }
}
