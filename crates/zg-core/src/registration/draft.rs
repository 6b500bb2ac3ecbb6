use serde::{Deserialize, Serialize};

/// Maximum number of characters the raw phone number field accepts.
pub const PHONE_NUMBER_MAX_LEN: usize = 11;

/// Identifies one input of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignupField {
    Username,
    Password,
    PasswordConfirmation,
    Email,
    Address,
    PhoneNumber,
}

/// Unsaved signup form data for one registration attempt.
///
/// Every field keeps the raw text exactly as typed. The phone number is the
/// only field with an input cap and stays raw digits until submission; it is
/// never formatted on keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    username: String,
    password: String,
    password_confirmation: String,
    email: String,
    address: String,
    phone_number: String,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_password_confirmation(&mut self, value: impl Into<String>) {
        self.password_confirmation = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
    }

    /// Stores the candidate value unless it is longer than
    /// [`PHONE_NUMBER_MAX_LEN`] characters, in which case the previously
    /// stored value is kept unchanged.
    pub fn set_phone_number(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.chars().count() <= PHONE_NUMBER_MAX_LEN {
            self.phone_number = value;
        }
    }

    /// Dispatches a raw input value to the matching field setter.
    pub fn set_field(&mut self, field: SignupField, value: impl Into<String>) {
        match field {
            SignupField::Username => self.set_username(value),
            SignupField::Password => self.set_password(value),
            SignupField::PasswordConfirmation => self.set_password_confirmation(value),
            SignupField::Email => self.set_email(value),
            SignupField::Address => self.set_address(value),
            SignupField::PhoneNumber => self.set_phone_number(value),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_confirmation(&self) -> &str {
        &self.password_confirmation
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}
