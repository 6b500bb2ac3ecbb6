use serde::{Deserialize, Serialize};
use zg_app::SubmissionStatus;
use zg_core::registration::{RegistrationDraft, ValidationState};

/// Signup form DTO for the frontend API.
///
/// This DTO separates the webview wire shape from the internal domain
/// models, allowing domain evolution without breaking the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFormDto {
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub validation: ValidationStateDto,
    pub status: SubmissionStatus,
}

/// Derived correctness flags, one per visual rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStateDto {
    pub password_length_ok: bool,
    pub password_complexity_ok: bool,
    pub passwords_match: bool,
}

impl From<ValidationState> for ValidationStateDto {
    fn from(state: ValidationState) -> Self {
        Self {
            password_length_ok: state.password_length_ok,
            password_complexity_ok: state.password_complexity_ok,
            passwords_match: state.passwords_match,
        }
    }
}

impl SignupFormDto {
    pub fn from_parts(
        draft: &RegistrationDraft,
        validation: ValidationState,
        status: SubmissionStatus,
    ) -> Self {
        Self {
            username: draft.username().to_string(),
            password: draft.password().to_string(),
            password_confirmation: draft.password_confirmation().to_string(),
            email: draft.email().to_string(),
            address: draft.address().to_string(),
            phone_number: draft.phone_number().to_string(),
            validation: validation.into(),
            status,
        }
    }
}
