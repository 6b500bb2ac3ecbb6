//! Browser-level validation contract for the signup inputs.
//!
//! The webview applies these as native `pattern` / `required` / `maxLength`
//! attributes before the submit handler ever runs. They are advisory
//! client-side gates, not trusted validation; the server remains the
//! authority on what it accepts.

use serde::Serialize;

use super::draft::SignupField;

/// Native `pattern` attribute for the username input.
pub const USERNAME_PATTERN: &str = "^[a-z0-9_-]{5,20}$";

/// Native `pattern` attribute for both password inputs.
///
/// The webview regex engine resolves the look-aheads; the predicates in
/// [`super::validation`] cover the visual flags with their own character
/// set.
pub const PASSWORD_PATTERN: &str =
    r"^(?=.*[A-Za-z])(?=.*\d)(?=.*[!@#$%^&*()])[A-Za-z\d!@#$%^&*()]{8,16}$";

/// Native `pattern` attribute for the email input.
pub const EMAIL_PATTERN: &str = "^[a-z0-9._-]+@[a-z]+[.]+[a-z]{2,3}$";

/// Native `maxLength` attribute for the address input.
pub const ADDRESS_MAX_LEN: u32 = 255;

/// Validation attributes for one form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub field: SignupField,
    pub input_type: &'static str,
    pub pattern: Option<&'static str>,
    pub required: bool,
    pub max_length: Option<u32>,
}

/// The full attribute set of the signup form, in render order.
pub fn signup_field_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            field: SignupField::Username,
            input_type: "text",
            pattern: Some(USERNAME_PATTERN),
            required: true,
            max_length: None,
        },
        FieldSpec {
            field: SignupField::Password,
            input_type: "password",
            pattern: Some(PASSWORD_PATTERN),
            required: true,
            max_length: None,
        },
        FieldSpec {
            field: SignupField::PasswordConfirmation,
            input_type: "password",
            pattern: Some(PASSWORD_PATTERN),
            required: true,
            max_length: None,
        },
        FieldSpec {
            field: SignupField::Email,
            input_type: "email",
            pattern: Some(EMAIL_PATTERN),
            required: true,
            max_length: None,
        },
        FieldSpec {
            field: SignupField::Address,
            input_type: "text",
            pattern: None,
            required: true,
            max_length: Some(ADDRESS_MAX_LEN),
        },
        FieldSpec {
            field: SignupField::PhoneNumber,
            input_type: "number",
            pattern: None,
            required: true,
            max_length: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_a_spec_and_is_required() {
        let specs = signup_field_specs();
        assert_eq!(specs.len(), 6);
        assert!(specs.iter().all(|s| s.required));
    }

    #[test]
    fn password_inputs_share_the_same_pattern() {
        let specs = signup_field_specs();
        let password = specs
            .iter()
            .find(|s| s.field == SignupField::Password)
            .unwrap();
        let confirmation = specs
            .iter()
            .find(|s| s.field == SignupField::PasswordConfirmation)
            .unwrap();
        assert_eq!(password.pattern, confirmation.pattern);
        assert_eq!(password.input_type, "password");
    }

    #[test]
    fn address_is_the_only_length_bounded_input() {
        let specs = signup_field_specs();
        let bounded: Vec<_> = specs.iter().filter(|s| s.max_length.is_some()).collect();
        assert_eq!(bounded.len(), 1);
        assert_eq!(bounded[0].field, SignupField::Address);
        assert_eq!(bounded[0].max_length, Some(255));
    }
}
