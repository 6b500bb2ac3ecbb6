use serde::{Deserialize, Serialize};

use super::draft::RegistrationDraft;
use super::phone::format_phone_number;

/// Wire payload for the registration endpoint.
///
/// Built exactly once per submission event. This is the only place the
/// phone number is formatted; the draft keeps raw digits throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

impl RegistrationRequest {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            username: draft.username().to_string(),
            password: draft.password().to_string(),
            email: draft.email().to_string(),
            address: draft.address().to_string(),
            phone_number: format_phone_number(draft.phone_number()),
        }
    }
}
