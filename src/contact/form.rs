use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumString, VariantArray};
use validator::{Validate, ValidationError, ValidationErrors};

/// Service categories offered on the site, as shown in the form's select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantArray)]
pub enum ServiceKind {
    #[strum(serialize = "Website development services")]
    WebsiteDevelopment,
    #[strum(serialize = "Android app development services")]
    AndroidDevelopment,
    #[strum(serialize = "UI/UX Design")]
    UiUxDesign,
    #[strum(serialize = "Custom Software Development")]
    CustomSoftware,
    #[strum(serialize = "Other")]
    Other,
}

/// One contact-form submission. Ephemeral: validated, dispatched, dropped.
///
/// A submission only reaches the relay once every field here validates;
/// violations are returned to the caller for inline rendering, never thrown.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = validate_service))]
    pub service: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

fn validate_service(service: &str) -> Result<(), ValidationError> {
    if ServiceKind::from_str(service).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("service").with_message("Please select a service".into()))
}

/// Per-field violation messages, one per field at most, for inline rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.service.is_none()
            && self.message.is_none()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let first_message = |field: &str| -> Option<String> {
            errors.field_errors().get(field).and_then(|list| {
                list.first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
            })
        };

        Self {
            name: first_message("name"),
            email: first_message("email"),
            service: first_message("service"),
            message: first_message("message"),
        }
    }
}

impl ContactSubmission {
    /// Check the submission against the form invariants.
    ///
    /// Returns the validated submission untouched, or the field-to-message
    /// map for the caller to render next to each input.
    pub fn validated(self) -> Result<Self, FormErrors> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => Err(errors.into()),
        }
    }
}
