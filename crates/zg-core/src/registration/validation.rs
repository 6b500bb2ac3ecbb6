//! Password validation predicates.
//!
//! Pure functions over the current field values. They drive the checkmark
//! and per-rule messages in the form; they never block typing or
//! submission.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::draft::RegistrationDraft;

/// Special characters accepted by the complexity rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "$@!%*#?&";

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 16;

lazy_static! {
    // Only the first character is checked against the allowed class; the
    // rest of the string is covered by the containment checks alone.
    static ref ALLOWED_FIRST_CHAR: Regex = Regex::new(r"^[A-Za-z\d$@!%*#?&]").unwrap();
}

/// True iff the password is 8 to 16 characters long.
pub fn is_valid_password_length(password: &str) -> bool {
    let len = password.chars().count();
    (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len)
}

/// True iff the password contains at least one ASCII letter, one digit, and
/// one character from [`PASSWORD_SPECIAL_CHARS`], and its first character
/// belongs to one of those classes.
///
/// Characters outside the allowed class after the first position do not
/// fail the check, and no length bound is applied here.
pub fn is_valid_password_complexity(password: &str) -> bool {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    has_letter && has_digit && has_special && ALLOWED_FIRST_CHAR.is_match(password)
}

/// True iff the two raw strings are identical.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

/// Correctness flags for the password inputs, derived from the draft.
///
/// The flags are recomputed from the current text on every read; nothing is
/// cached between keystrokes, so they cannot drift out of sync with the
/// underlying fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationState {
    pub password_length_ok: bool,
    pub password_complexity_ok: bool,
    pub passwords_match: bool,
}

impl ValidationState {
    pub fn derive(draft: &RegistrationDraft) -> Self {
        Self {
            password_length_ok: is_valid_password_length(draft.password()),
            password_complexity_ok: is_valid_password_complexity(draft.password()),
            passwords_match: passwords_match(draft.password(), draft.password_confirmation()),
        }
    }
}
