//! Contact-form submission pipeline: validation, relay dispatch, and the
//! submission lifecycle. This is the only part of the site with invariants
//! worth enforcing; everything else is presentation.

pub mod form;
pub mod relay;
pub mod state;

pub use form::{ContactSubmission, FormErrors, ServiceKind};
pub use relay::{RelayClient, RelayError};
pub use state::{SubmissionState, SUCCESS_DISPLAY};
