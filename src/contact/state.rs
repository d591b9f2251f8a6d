use std::time::Duration;

use crate::contact::relay::RelayError;

/// How long the success panel stays up before the form reverts to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Lifecycle of one contact-form submission attempt.
///
/// Created `Idle`. `submit` is rejected while a dispatch is already in
/// flight, which is what keeps the submit control single-fire. `Succeeded`
/// reverts to `Idle` after [`SUCCESS_DISPLAY`]; `Failed` reverts on the next
/// submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(RelayError),
}

impl SubmissionState {
    /// Attempt to start a dispatch. Returns false when one is already in
    /// flight or the success panel is still showing.
    pub fn submit(&mut self) -> bool {
        match self {
            SubmissionState::Idle | SubmissionState::Failed(_) => {
                *self = SubmissionState::Submitting;
                true
            }
            SubmissionState::Submitting | SubmissionState::Succeeded => false,
        }
    }

    /// Record the relay outcome. Only meaningful while submitting; returns
    /// false otherwise.
    pub fn resolve(&mut self, outcome: Result<(), RelayError>) -> bool {
        if *self != SubmissionState::Submitting {
            return false;
        }
        *self = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(err) => SubmissionState::Failed(err),
        };
        true
    }

    /// Return to idle, ending the success display or clearing a failure.
    pub fn revert(&mut self) {
        *self = SubmissionState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmissionState::Submitting
    }
}

/// Success display window in milliseconds, as embedded in the toast markup.
pub fn success_display_ms() -> u64 {
    SUCCESS_DISPLAY.as_millis() as u64
}
