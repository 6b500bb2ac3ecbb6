use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use zg_core::registration::{RegistrationDraft, SignupField, ValidationState};

/// Lifecycle of the current submission attempt.
///
/// Observational only: nothing reads it to gate a new submission, so
/// concurrent duplicate POSTs remain possible while one is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Done,
}

/// Live state of one signup form view.
///
/// Each field update runs synchronously to completion. The draft is read
/// back by the same command surface that mutates it, plus the submission
/// use case taking a snapshot; locks are never held across an await.
pub struct SignupFormSession {
    draft: RwLock<RegistrationDraft>,
    status: RwLock<SubmissionStatus>,
}

impl SignupFormSession {
    pub fn new() -> Self {
        Self {
            draft: RwLock::new(RegistrationDraft::new()),
            status: RwLock::new(SubmissionStatus::Idle),
        }
    }

    /// Store a raw input value.
    ///
    /// The phone-number cap lives in the draft setter; every other field is
    /// stored verbatim.
    pub fn update_field(&self, field: SignupField, value: impl Into<String>) {
        self.draft
            .write()
            .expect("form draft lock poisoned")
            .set_field(field, value);
    }

    /// Current correctness flags, derived from the live draft on every read.
    pub fn validation(&self) -> ValidationState {
        ValidationState::derive(&self.draft.read().expect("form draft lock poisoned"))
    }

    /// Copy of the live draft as read at submission time.
    pub fn snapshot(&self) -> RegistrationDraft {
        self.draft.read().expect("form draft lock poisoned").clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.read().expect("form status lock poisoned")
    }

    pub(crate) fn set_status(&self, status: SubmissionStatus) {
        *self.status.write().expect("form status lock poisoned") = status;
    }

    /// Drop all field state for a fresh form view.
    pub fn reset(&self) {
        *self.draft.write().expect("form draft lock poisoned") = RegistrationDraft::new();
        self.set_status(SubmissionStatus::Idle);
    }
}

impl Default for SignupFormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_field_feeds_the_derived_validation() {
        let session = SignupFormSession::new();
        session.update_field(SignupField::Password, "Passw0rd!");
        session.update_field(SignupField::PasswordConfirmation, "Passw0rd!");

        let validation = session.validation();
        assert!(validation.password_length_ok);
        assert!(validation.password_complexity_ok);
        assert!(validation.passwords_match);
    }

    #[test]
    fn test_phone_cap_is_enforced_through_the_session() {
        let session = SignupFormSession::new();
        session.update_field(SignupField::PhoneNumber, "01012345678");
        session.update_field(SignupField::PhoneNumber, "010123456789");

        assert_eq!(session.snapshot().phone_number(), "01012345678");
    }

    #[test]
    fn test_reset_returns_to_a_fresh_form() {
        let session = SignupFormSession::new();
        session.update_field(SignupField::Username, "user1");
        session.set_status(SubmissionStatus::Done);

        session.reset();

        assert_eq!(session.snapshot(), RegistrationDraft::new());
        assert_eq!(session.status(), SubmissionStatus::Idle);
    }
}
